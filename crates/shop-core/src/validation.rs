//! # Validation Module
//!
//! Input coercion for values typed at the operator prompt.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Coercion Happens                             │
//! │                                                                         │
//! │  Prompt (raw String)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  THIS MODULE: parse once, at the boundary                              │
//! │  ├── price  → Money   (mismatch is an error)                           │
//! │  └── rating → f64     (anything but plain digits falls back to 1.0)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Entity setters receive typed values only                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::validation::{parse_price, parse_rating};
//!
//! assert_eq!(parse_price("150").unwrap().minor(), 15000);
//! assert_eq!(parse_rating("5"), Some(5.0));
//! assert_eq!(parse_rating("4.5"), None);
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Boundary Parsers
// =============================================================================

/// Parses a price typed by the operator.
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    Money::parse_decimal(input)
}

/// Parses a rating typed by the operator.
///
/// Only a plain non-negative integer string (ASCII digits, nothing else,
/// not even surrounding whitespace) is accepted. A digit string too long to
/// be a finite `f64` is treated like any other unusable answer. `None` tells
/// the caller to apply the default rating; it is not an error.
pub fn parse_rating(input: &str) -> Option<f64> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    input.parse::<f64>().ok().filter(|rating| rating.is_finite())
}

// =============================================================================
// Setter Validators
// =============================================================================

/// Validates a rating handed to a setter.
///
/// ## Rules
/// - Must be a finite number (NaN and infinities are not ratings)
pub fn validate_rating(rating: f64) -> ValidationResult<f64> {
    if !rating.is_finite() {
        return Err(ValidationError::type_mismatch(
            "rating",
            "a finite number",
            rating.to_string(),
        ));
    }
    Ok(rating)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("100").unwrap(), Money::from_units(100));
        assert!(parse_price("a hundred").is_err());
        assert!(parse_price("").is_err());
    }

    #[test]
    fn test_parse_rating_accepts_only_digits() {
        assert_eq!(parse_rating("0"), Some(0.0));
        assert_eq!(parse_rating("5"), Some(5.0));
        assert_eq!(parse_rating("007"), Some(7.0));

        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating(" 3"), None);
        assert_eq!(parse_rating("3\n"), None);
        assert_eq!(parse_rating("4.5"), None);
        assert_eq!(parse_rating("-1"), None);
        assert_eq!(parse_rating("five"), None);
    }

    #[test]
    fn test_parse_rating_rejects_digits_beyond_f64() {
        let huge = "9".repeat(400);
        assert_eq!(parse_rating(&huge), None);
        assert_eq!(parse_rating(&"9".repeat(300)).map(f64::is_finite), Some(true));
    }

    #[test]
    fn test_validate_rating() {
        assert_eq!(validate_rating(4.5).unwrap(), 4.5);
        assert_eq!(validate_rating(-2.0).unwrap(), -2.0);
        assert!(validate_rating(f64::NAN).is_err());
        assert!(validate_rating(f64::INFINITY).is_err());
    }
}
