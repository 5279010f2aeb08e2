//! # User
//!
//! A shop customer: login, password digest and basket.
//!
//! ## Password Storage
//! ```text
//! "hunter2" ──► SHA-256 ──► "f52fbd32b2b3b86ff88ef6c490628285..." (64 hex chars)
//!
//! Only the digest is kept. Verification hashes the candidate and compares
//! digests. There is no per-user salt, so equal passwords give equal digests.
//! ```

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::basket::Basket;

/// Password stored when none is supplied. A known weak default.
pub const DEFAULT_PASSWORD: &str = "default_password";

// =============================================================================
// Password Hash
// =============================================================================

/// Hex-encoded SHA-256 digest of a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hashes a plaintext password.
    ///
    /// ```rust
    /// use shop_core::user::PasswordHash;
    ///
    /// let hash = PasswordHash::digest("secret");
    /// assert_eq!(hash.as_str().len(), 64);
    /// assert!(hash.verify("secret"));
    /// assert!(!hash.verify("Secret"));
    /// ```
    pub fn digest(plain: &str) -> Self {
        PasswordHash(hex::encode(Sha256::digest(plain.as_bytes())))
    }

    /// Hashes the candidate and compares digests.
    pub fn verify(&self, candidate: &str) -> bool {
        PasswordHash::digest(candidate) == *self
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// User
// =============================================================================

/// A registered (or synthetic default) customer.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    login: String,
    password: PasswordHash,
    basket: Basket,
}

impl User {
    /// Creates a user with an empty basket.
    ///
    /// A missing or empty password is replaced by [`DEFAULT_PASSWORD`];
    /// [`User::uses_default_password`] reports when that happened.
    pub fn new(login: impl Into<String>, password: Option<&str>) -> Self {
        User::with_basket(login, password, Basket::new())
    }

    /// Creates a user who already has a basket.
    pub fn with_basket(login: impl Into<String>, password: Option<&str>, basket: Basket) -> Self {
        let login = login.into();
        let password = match password {
            Some(plain) if !plain.is_empty() => PasswordHash::digest(plain),
            _ => {
                warn!(%login, "no password supplied, default password applied");
                PasswordHash::digest(DEFAULT_PASSWORD)
            }
        };

        User {
            login,
            password,
            basket,
        }
    }

    #[inline]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// The stored digest. Plaintext is never kept.
    #[inline]
    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.verify(candidate)
    }

    /// True when the stored digest is the digest of [`DEFAULT_PASSWORD`].
    pub fn uses_default_password(&self) -> bool {
        self.password.verify(DEFAULT_PASSWORD)
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn basket_mut(&mut self) -> &mut Basket {
        &mut self.basket
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {}, {}", self.login, self.basket)
    }
}
