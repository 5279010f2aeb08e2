//! # Prompt Boundary
//!
//! The one operation the core needs from an operator: "give me a string for
//! this label". Console, test script or anything else can sit behind it.
//!
//! ```text
//! ┌──────────────┐   ask("price")    ┌──────────────────────────────┐
//! │  Shop        │ ────────────────► │  impl Prompt                 │
//! │  (shop-core) │ ◄──────────────── │  ConsolePrompt (shop-cli)    │
//! └──────────────┘   Ok("150")       │  ScriptedPrompt (this file)  │
//!                                    └──────────────────────────────┘
//! ```

use std::collections::VecDeque;

use crate::error::PromptError;

/// Source of operator answers.
pub trait Prompt {
    /// Requests a labeled string from the operator.
    fn ask(&mut self, label: &str) -> Result<String, PromptError>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        (**self).ask(label)
    }
}

/// Answers from a prepared queue, in order.
///
/// Used for non-interactive runs and tests. Every label asked is recorded.
///
/// ```rust
/// use shop_core::prompt::{Prompt, ScriptedPrompt};
///
/// let mut prompt = ScriptedPrompt::new(["alice"]);
/// assert_eq!(prompt.ask("login").unwrap(), "alice");
/// assert!(prompt.ask("password").is_err());
/// assert_eq!(prompt.asked(), ["login", "password"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// A prompt with no answers; any question fails.
    pub fn empty() -> Self {
        ScriptedPrompt::default()
    }

    /// Queues one more answer.
    pub fn push(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    /// Labels asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        self.asked.push(label.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| PromptError::Exhausted(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_in_order() {
        let mut prompt = ScriptedPrompt::new(["one", "two"]);
        prompt.push("three");

        assert_eq!(prompt.ask("a").unwrap(), "one");
        assert_eq!(prompt.ask("b").unwrap(), "two");
        assert_eq!(prompt.remaining(), 1);
        assert_eq!(prompt.ask("c").unwrap(), "three");
    }

    #[test]
    fn test_empty_prompt_fails_with_label() {
        let mut prompt = ScriptedPrompt::empty();
        let err = prompt.ask("login").unwrap_err();
        assert!(matches!(err, PromptError::Exhausted(ref label) if label == "login"));
    }

    #[test]
    fn test_mutable_reference_is_a_prompt() {
        fn first_answer(mut p: impl Prompt) -> String {
            p.ask("x").unwrap()
        }

        let mut prompt = ScriptedPrompt::new(["yes"]);
        assert_eq!(first_answer(&mut prompt), "yes");
        assert_eq!(prompt.asked(), ["x"]);
    }
}
