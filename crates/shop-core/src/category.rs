//! # Category
//!
//! A named grouping of products.
//!
//! ## Association Rules
//! ```text
//! add(P) to C:
//!   1. P.category_id = C.id          (always, last write wins)
//!   2. P already in C?  ── yes ──►  no second entry
//!                       └─ no ───►  append, insertion order kept
//!
//! Same instance added to C1 then C2:
//!   C1.products = [P]   C2.products = [P]   P.category_id = C2.id
//! ```

use std::fmt;

use tracing::debug;

use crate::product::SharedProduct;
use crate::types::CategoryId;

/// A product category.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: String,
    products: Vec<SharedProduct>,
}

impl Category {
    /// Creates an empty category with the next category id.
    pub fn new(name: impl Into<String>) -> Self {
        Category {
            id: CategoryId::next(),
            name: name.into(),
            products: Vec::new(),
        }
    }

    /// Creates a category and associates the given products with it.
    pub fn with_products<I>(name: impl Into<String>, products: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SharedProduct>,
    {
        let mut category = Category::new(name);
        category.add_products(products);
        category
    }

    #[inline]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[SharedProduct] {
        &self.products
    }

    pub fn contains(&self, product: &SharedProduct) -> bool {
        self.products.iter().any(|p| p.same_instance(product))
    }

    /// Stamps the product with this category's id and appends it.
    ///
    /// Returns `false` when the instance was already present and so was
    /// not appended a second time.
    pub fn add_product(&mut self, product: impl Into<SharedProduct>) -> bool {
        let product = product.into();
        product.borrow_mut().set_category_id(self.id);

        if self.contains(&product) {
            debug!(category = %self.id, product = %product.id(), "product already in category");
            return false;
        }

        debug!(category = %self.id, product = %product.id(), "product added to category");
        self.products.push(product);
        true
    }

    pub fn add_products<I>(&mut self, products: I)
    where
        I: IntoIterator,
        I::Item: Into<SharedProduct>,
    {
        for product in products {
            self.add_product(product);
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Category {}:", self.name)?;
        for product in &self.products {
            writeln!(f, "\t{}", product)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::product::Product;

    #[test]
    fn test_ids_are_independent_and_increasing() {
        let first = Category::new("Shoes");
        let _unrelated = Product::named("bump the product counter");
        let second = Category::new("Hats");
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_add_product_stamps_category_id() {
        let mut category = Category::new("Underwear");
        let product = SharedProduct::from(Product::new("Boxers", Money::from_units(150)));

        assert!(category.add_product(product.clone()));
        assert_eq!(product.borrow().category_id(), category.id());
        assert_eq!(category.products().len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let category = Category::with_products(
            "Underwear",
            vec![Product::named("P1"), Product::named("P2"), Product::named("P3")],
        );
        let names: Vec<String> = category
            .products()
            .iter()
            .map(|p| p.borrow().name().to_string())
            .collect();
        assert_eq!(names, ["P1", "P2", "P3"]);
    }

    #[test]
    fn test_last_category_wins_but_both_keep_the_product() {
        let mut first = Category::new("Sale");
        let mut second = Category::new("New");
        let product = SharedProduct::from(Product::named("Boxers"));

        first.add_product(product.clone());
        second.add_product(product.clone());

        assert_eq!(product.borrow().category_id(), second.id());
        assert!(first.contains(&product));
        assert!(second.contains(&product));
    }

    #[test]
    fn test_readding_same_instance_does_not_duplicate() {
        let mut first = Category::new("Sale");
        let mut second = Category::new("New");
        let product = SharedProduct::from(Product::named("Boxers"));

        first.add_product(product.clone());
        second.add_product(product.clone());
        assert!(!first.add_product(product.clone()));

        assert_eq!(first.products().len(), 1);
        assert_eq!(product.borrow().category_id(), first.id());
    }

    #[test]
    fn test_equal_names_are_distinct_entries() {
        let mut category = Category::new("Sale");
        category.add_product(Product::named("Boxers"));
        category.add_product(Product::named("Boxers"));
        assert_eq!(category.products().len(), 2);
    }

    #[test]
    fn test_display() {
        let category = Category::with_products(
            "Socks",
            vec![Product::new("Wool", Money::from_units(3))],
        );
        assert_eq!(
            category.to_string(),
            "Category Socks:\n\tProduct: Wool, price: 3.00, rating: 1\n"
        );
    }
}
