//! Console implementation of the prompt boundary.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use shop_core::{Prompt, PromptError};

/// Asks on a writer and reads one line per answer.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    /// Prompt over the process's stdin and stdout.
    pub fn stdio() -> Self {
        ConsolePrompt::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsolePrompt { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn ask(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "Enter {}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed(label.to_string()));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
