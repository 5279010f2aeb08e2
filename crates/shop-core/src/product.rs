//! # Product
//!
//! A named, priced, rated item for sale.
//!
//! A product can be referenced from the shop catalog and from several
//! categories at once. Those places hold a [`SharedProduct`] handle to the
//! same instance, so re-stamping the category id through one handle is seen
//! through all of them. Baskets take a frozen copy instead.

use serde::Serialize;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::money::Money;
use crate::types::{CategoryId, ProductId};
use crate::validation::{validate_rating, ValidationResult};

/// Rating given to products that were not rated explicitly.
pub const DEFAULT_RATING: f64 = 1.0;

/// Price given to products created with [`Product::named`].
pub const DEFAULT_PRICE: Money = Money::from_units(1);

// =============================================================================
// Product
// =============================================================================

/// A product available in the shop.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Sequential identity, immutable once assigned.
    id: ProductId,

    /// Display name.
    name: String,

    /// Unit price.
    price: Money,

    /// Customer rating.
    rating: f64,

    /// Category this product was last associated with.
    category_id: CategoryId,
}

impl Product {
    /// Creates a product with the default rating and no category.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            id: ProductId::next(),
            name: name.into(),
            price,
            rating: DEFAULT_RATING,
            category_id: CategoryId::UNASSIGNED,
        }
    }

    /// Creates a product with the default price and rating.
    pub fn named(name: impl Into<String>) -> Self {
        Product::new(name, DEFAULT_PRICE)
    }

    /// Creates a product with an explicit rating.
    ///
    /// The rating is checked before an id is handed out, so a rejected
    /// product consumes no identity.
    ///
    /// ```rust
    /// use shop_core::{Money, Product};
    ///
    /// let p = Product::with_rating("Boxers", Money::from_units(150), 4.5).unwrap();
    /// assert_eq!(p.rating(), 4.5);
    /// assert!(Product::with_rating("Boxers", Money::from_units(150), f64::NAN).is_err());
    /// ```
    pub fn with_rating(
        name: impl Into<String>,
        price: Money,
        rating: f64,
    ) -> ValidationResult<Self> {
        let rating = validate_rating(rating)?;
        let mut product = Product::new(name, price);
        product.rating = rating;
        Ok(product)
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn rating(&self) -> f64 {
        self.rating
    }

    #[inline]
    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Money) {
        self.price = price;
    }

    /// Replaces the rating. On error the previous rating is kept.
    pub fn set_rating(&mut self, rating: f64) -> ValidationResult<()> {
        self.rating = validate_rating(rating)?;
        Ok(())
    }

    pub fn set_category_id(&mut self, category_id: CategoryId) {
        self.category_id = category_id;
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, price: {}, rating: {}",
            self.name, self.price, self.rating
        )
    }
}

// =============================================================================
// Shared Product Handle
// =============================================================================

/// Single-threaded shared handle to one product instance.
///
/// Cloning the handle does not copy the product.
#[derive(Debug, Clone)]
pub struct SharedProduct(Rc<RefCell<Product>>);

impl SharedProduct {
    pub fn new(product: Product) -> Self {
        SharedProduct(Rc::new(RefCell::new(product)))
    }

    pub fn borrow(&self) -> Ref<'_, Product> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Product> {
        self.0.borrow_mut()
    }

    pub fn id(&self) -> ProductId {
        self.0.borrow().id()
    }

    /// Frozen copy of the product as it is right now.
    pub fn snapshot(&self) -> Product {
        self.0.borrow().clone()
    }

    /// True when both handles point at the same instance.
    pub fn same_instance(&self, other: &SharedProduct) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Product> for SharedProduct {
    fn from(product: Product) -> Self {
        SharedProduct::new(product)
    }
}

impl fmt::Display for SharedProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0.borrow(), f)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_fields_match_inputs() {
        let before = Product::named("warmup");
        let p = Product::with_rating("Boxers", Money::from_units(150), 3.0).unwrap();

        assert_eq!(p.name(), "Boxers");
        assert_eq!(p.price(), Money::from_units(150));
        assert_eq!(p.rating(), 3.0);
        assert!(p.category_id().is_unassigned());
        assert!(p.id() > before.id());
    }

    #[test]
    fn test_defaults() {
        let p = Product::named("Socks");
        assert_eq!(p.price(), DEFAULT_PRICE);
        assert_eq!(p.rating(), DEFAULT_RATING);
    }

    #[test]
    fn test_rejected_rating_keeps_previous_value() {
        let mut p = Product::new("Socks", Money::from_units(10));
        p.set_rating(4.0).unwrap();

        let err = p.set_rating(f64::NAN).unwrap_err();
        assert!(err.to_string().contains("rating"));
        assert_eq!(p.rating(), 4.0);
    }

    #[test]
    fn test_display() {
        let p = Product::with_rating("Socks", Money::from_minor(1050), 2.5).unwrap();
        assert_eq!(p.to_string(), "Product: Socks, price: 10.50, rating: 2.5");
    }

    #[test]
    fn test_shared_handles_see_the_same_instance() {
        let a = SharedProduct::from(Product::named("Hat"));
        let b = a.clone();
        let other = SharedProduct::from(Product::named("Hat"));

        b.borrow_mut().set_category_id(CategoryId::from_raw(3));
        assert_eq!(a.borrow().category_id(), CategoryId::from_raw(3));
        assert!(a.same_instance(&b));
        assert!(!a.same_instance(&other));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedProduct::from(Product::new("Hat", Money::from_units(5)));
        let frozen = shared.snapshot();
        shared.borrow_mut().set_price(Money::from_units(9));

        assert_eq!(frozen.price(), Money::from_units(5));
        assert_eq!(frozen.id(), shared.id());
    }
}
