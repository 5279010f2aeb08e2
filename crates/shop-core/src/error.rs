//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── CoreError        - Domain errors (unknown user, wrong password)   │
//! │  ├── ValidationError  - Field-level input failures (type mismatch)     │
//! │  └── PromptError      - Operator input boundary failures               │
//! │                                                                         │
//! │  shop-cli errors (binary)                                              │
//! │  └── ConfigError      - Configuration loading failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (binary edge)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (login, field, value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Shop domain errors.
///
/// Every failure is returned synchronously at the point of detection;
/// nothing is retried.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No registered user has the requested login.
    ///
    /// ## When This Occurs
    /// - Authentication with a login that was never registered
    /// - A typo in the login at the prompt
    #[error("User not found: {0}")]
    UnknownUser(String),

    /// The supplied password does not hash to the stored digest.
    #[error("Invalid password for user {login}")]
    InvalidPassword { login: String },

    /// The basket total does not fit in a Money value.
    #[error("Basket total for {login} is too large")]
    TotalOverflow { login: String },

    /// A category selector matched no category.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// The operator input boundary failed.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for a type mismatch, however deeply it was wrapped.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            CoreError::Validation(ValidationError::TypeMismatch { .. })
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when a value crosses the input boundary or reaches a setter
/// with the wrong semantic type.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value cannot be interpreted as the type the field requires.
    #[error("{field} expected {expected}, got '{found}'")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// Duplicate value (e.g., duplicate login).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Shorthand for building a [`ValidationError::TypeMismatch`].
    pub fn type_mismatch(field: &str, expected: &str, found: impl Into<String>) -> Self {
        ValidationError::TypeMismatch {
            field: field.to_string(),
            expected: expected.to_string(),
            found: found.into(),
        }
    }
}

// =============================================================================
// Prompt Error
// =============================================================================

/// Failures of the operator prompt/response boundary.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input stream ended before an answer was read.
    #[error("input closed while waiting for {0}")]
    Closed(String),

    /// A scripted prompt ran out of prepared answers.
    #[error("no scripted answer left for {0}")]
    Exhausted(String),

    /// Underlying console I/O failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownUser("alice".to_string());
        assert_eq!(err.to_string(), "User not found: alice");

        let err = CoreError::InvalidPassword {
            login: "bob".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid password for user bob");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::type_mismatch("price", "a number", "abc");
        assert_eq!(err.to_string(), "price expected a number, got 'abc'");

        let err = ValidationError::Duplicate {
            field: "login".to_string(),
            value: "alice".to_string(),
        };
        assert_eq!(err.to_string(), "login 'alice' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::type_mismatch("rating", "a number", "x").into();
        assert!(core_err.is_type_mismatch());

        let other = CoreError::CategoryNotFound("id 9".to_string());
        assert!(!other.is_type_mismatch());

        let overflow = CoreError::TotalOverflow {
            login: "alice".to_string(),
        };
        assert_eq!(overflow.to_string(), "Basket total for alice is too large");
    }

    #[test]
    fn test_prompt_error_converts_to_core_error() {
        let err: CoreError = PromptError::Exhausted("login".to_string()).into();
        assert!(matches!(err, CoreError::Prompt(PromptError::Exhausted(_))));
        assert_eq!(err.to_string(), "Prompt failed: no scripted answer left for login");
    }
}
