//! # Money Module
//!
//! Provides the `Money` type used for every price and total in the shop.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  With integer minor units:                                              │
//! │    10 + 20 = 30 hundredths, always                                      │
//! │                                                                         │
//! │  Operator input such as "10.99" is parsed ONCE at the input boundary   │
//! │  into 1099 minor units and never touches a float afterwards.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! let price = Money::from_units(150);
//! let total = price + Money::from_minor(1099);
//! assert_eq!(total.to_string(), "160.99");
//!
//! let parsed: Money = "10.5".parse().unwrap();
//! assert_eq!(parsed.minor(), 1050);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

/// Minor units per whole unit.
const MINOR_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in hundredths of the shop's currency unit.
///
/// Signed, so a negative price is representable; the shop puts no sign
/// constraint on prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (hundredths).
    ///
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(1099).minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole units.
    ///
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(150).minor(), 15000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * MINOR_PER_UNIT)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / MINOR_PER_UNIT
    }

    /// Returns the fractional portion as an absolute value (0-99).
    #[inline]
    pub const fn fraction(&self) -> i64 {
        (self.0 % MINOR_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, returning `None` when the sum does not fit.
    ///
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let sum = Money::from_units(1).checked_add(Money::from_minor(50));
/// assert_eq!(sum, Some(Money::from_minor(150)));
    /// assert_eq!(Money::from_minor(i64::MAX).checked_add(Money::from_minor(1)), None);
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }

    /// Parses an operator-entered decimal amount.
    ///
    /// ## Accepted Forms
    /// ```text
    /// "150"    → 15000      "-3"     → -300
    /// "10.5"   → 1050       " 7.25 " → 725   (surrounding space trimmed)
    /// ```
    /// At most two fractional digits; anything else is a type mismatch on
    /// the `price` field.
    pub fn parse_decimal(input: &str) -> Result<Self, ValidationError> {
        let mismatch = || ValidationError::type_mismatch("price", "a decimal amount", input);
        let trimmed = input.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(frac) || frac.len() > 2 {
            return Err(mismatch());
        }
        if digits.contains('.') && frac.is_empty() {
            return Err(mismatch());
        }

        let whole: i64 = whole.parse().map_err(|_| mismatch())?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| mismatch())? * 10,
            _ => frac.parse().map_err(|_| mismatch())?,
        };

        let minor = whole
            .checked_mul(MINOR_PER_UNIT)
            .and_then(|m| m.checked_add(frac))
            .ok_or_else(mismatch)?;

        Ok(Money(if negative { -minor } else { minor }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `<units>.<two digits>`, no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.fraction())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_decimal(s)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
