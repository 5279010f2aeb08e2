//! # Basket
//!
//! A user's shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Operations                                    │
//! │                                                                         │
//! │  Shop Operation           Basket Call             State Change          │
//! │  ──────────────           ───────────             ────────────          │
//! │                                                                         │
//! │  add_to_cart(p) ─────────► add_to_cart(p) ──────► items.push(snapshot) │
//! │                                                                         │
//! │  checkout() ─────────────► total() ─────────────► (read only)          │
//! │                                                                         │
//! │  NOTE: append-only. No removal, no quantity merge: adding the same     │
//! │        product twice yields two entries.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::money::Money;
use crate::product::Product;

/// An entry in the basket.
///
/// ## Design Notes
/// The product is a frozen copy taken when it was added, so later edits to
/// the catalog entry do not change what the customer is charged.
#[derive(Debug, Clone, Serialize)]
pub struct BasketItem {
    /// Product at time of adding (frozen).
    pub product: Product,

    /// When this item was added.
    pub added_at: DateTime<Utc>,
}

impl BasketItem {
    pub fn from_product(product: &Product) -> Self {
        BasketItem {
            product: product.clone(),
            added_at: Utc::now(),
        }
    }
}

/// The shopping basket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Basket {
    items: Vec<BasketItem>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Basket { items: Vec::new() }
    }

    /// Creates a basket holding one product.
    pub fn with_product(product: &Product) -> Self {
        let mut basket = Basket::new();
        basket.add_to_cart(product);
        basket
    }

    /// Appends a snapshot of the product.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.items.push(BasketItem::from_product(product));
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the prices of every item, or `None` if it overflows.
    pub fn total(&self) -> Option<Money> {
        self.items
            .iter()
            .try_fold(Money::zero(), |acc, item| acc.checked_add(item.product.price()))
    }
}

impl fmt::Display for Basket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "Basket is empty");
        }
        write!(f, "Basket contains:")?;
        for item in &self.items {
            write!(f, "\n\t{}", item.product)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_basket_is_empty() {
        let basket = Basket::new();
        assert!(basket.is_empty());
        assert_eq!(basket.total(), Some(Money::zero()));
        assert_eq!(basket.to_string(), "Basket is empty");
    }

    #[test]
    fn test_same_product_twice_is_two_entries() {
        let product = Product::new("Boxers", Money::from_units(150));
        let mut basket = Basket::with_product(&product);
        basket.add_to_cart(&product);

        assert_eq!(basket.item_count(), 2);
        assert_eq!(basket.total(), Some(Money::from_units(300)));
    }

    #[test]
    fn test_total() {
        let mut basket = Basket::new();
        for price in [100, 150, 150] {
            basket.add_to_cart(&Product::new("Item", Money::from_units(price)));
        }
        assert_eq!(basket.total(), Some(Money::from_units(400)));
    }

    #[test]
    fn test_total_overflow_is_none() {
        let huge = Money::parse_decimal("92233720368547758").unwrap();
        let mut basket = Basket::with_product(&Product::new("Yacht", huge));
        assert_eq!(basket.total(), Some(huge));

        basket.add_to_cart(&Product::new("Yacht", huge));
        assert_eq!(basket.total(), None);
    }

    #[test]
    fn test_display_lists_items() {
        let basket = Basket::with_product(&Product::new("Hat", Money::from_units(2)));
        assert_eq!(
            basket.to_string(),
            "Basket contains:\n\tProduct: Hat, price: 2.00, rating: 1"
        );
    }

    #[test]
    fn test_serializes_items_with_timestamps() {
        let basket = Basket::with_product(&Product::new("Hat", Money::from_units(2)));
        let json = serde_json::to_value(&basket).unwrap();

        let item = &json["items"][0];
        assert_eq!(item["product"]["name"], "Hat");
        assert_eq!(item["product"]["price"], 200);
        assert!(item["added_at"].is_string());
    }
}
