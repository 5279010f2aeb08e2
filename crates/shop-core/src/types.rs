//! # Identity Types
//!
//! Sequential identifiers for products and categories.
//!
//! ## Identity Counters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  One process-wide counter per entity kind                               │
//! │                                                                         │
//! │  Product::new ──► ProductId::next()   1, 2, 3, ...                     │
//! │  Category::new ─► CategoryId::next()  1, 2, 3, ...  (independent)      │
//! │                                                                         │
//! │  Both counters start at zero, so the first id handed out is 1.         │
//! │  CategoryId(0) is reserved for "not in any category".                  │
//! │  Ids are never reused and never reset while the process lives.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static LAST_PRODUCT_ID: AtomicU32 = AtomicU32::new(0);
static LAST_CATEGORY_ID: AtomicU32 = AtomicU32::new(0);

// =============================================================================
// Product Id
// =============================================================================

/// Identity of a product, assigned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(u32);

impl ProductId {
    /// Hands out the next product id. Only `Product` constructors call this.
    pub(crate) fn next() -> Self {
        ProductId(LAST_PRODUCT_ID.fetch_add(1, Ordering::Relaxed) + 1)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Category Id
// =============================================================================

/// Identity of a category, assigned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(u32);

impl CategoryId {
    /// Marker carried by products that belong to no category.
    pub const UNASSIGNED: CategoryId = CategoryId(0);

    /// Hands out the next category id. Only `Category` constructors call this.
    pub(crate) fn next() -> Self {
        CategoryId(LAST_CATEGORY_ID.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Wraps a raw id, e.g. one typed by an operator.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        CategoryId(raw)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_unassigned(&self) -> bool {
        self.0 == 0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        CategoryId::UNASSIGNED
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
