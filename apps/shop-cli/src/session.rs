//! # Walk-through Session
//!
//! The scripted tour the console runs against a fresh shop.
//!
//! ```text
//! register user ─► log in ─► catalog product ─► categories ─► associate
//!        │                                                        │
//!        ▼                                                        ▼
//!   (prompted)                                  print categories with products
//!                                                                 │
//!                                   add two products to cart ◄────┘
//!                                               │
//!                                               ▼
//!                                     checkout (text or JSON)
//! ```
//!
//! Any error ends the walk-through and is returned to the caller.

use std::io::Write;

use shop_core::{Category, CategorySelector, CheckoutSummary, Money, Product, Prompt, Shop};
use tracing::info;

use crate::config::OutputFormat;

/// Runs the walk-through, writing operator-facing text to `out`.
pub fn run_walkthrough<P, W>(
    shop: &mut Shop<P>,
    out: &mut W,
    format: OutputFormat,
) -> anyhow::Result<CheckoutSummary>
where
    P: Prompt,
    W: Write,
{
    info!(shop = shop.name(), "walk-through started");

    writeln!(out, "Register a new user")?;
    shop.add_user(None)?;

    writeln!(out, "Log in")?;
    let login = shop.authenticate()?.login().to_string();
    writeln!(out, "Welcome, {}", login)?;

    shop.add_product(Some(Product::new("Briefs", Money::from_units(100))))?;

    let underwear = shop.add_category(Category::new("Underwear"));
    shop.create_new_category()?;

    shop.add_products_to_category(
        vec![
            Product::new("Boxers", Money::from_units(150)),
            Product::new("Boxers 2", Money::from_units(150)),
            Product::new("Boxers 1", Money::from_units(150)),
            Product::new("Boxers 2", Money::from_units(150)),
        ],
        CategorySelector::Id(underwear),
    )?;

    write!(out, "{}", shop.render_categories_with_products())?;

    shop.add_to_cart(&Product::new("Boxers", Money::from_units(150)));
    shop.add_to_cart(&Product::new("Boxers_2", Money::from_units(150)));

    let summary = shop.checkout()?;
    match format {
        OutputFormat::Text => writeln!(out, "{}", summary)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&summary)?)?,
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{CoreError, ScriptedPrompt, ShopConfig};

    fn shop(answers: &[&str]) -> Shop<ScriptedPrompt> {
        Shop::new(
            ShopConfig::named("walk-through"),
            ScriptedPrompt::new(answers.iter().copied()),
        )
    }

    #[test]
    fn test_full_walkthrough_text() {
        let mut shop = shop(&["alice", "secret", "alice", "secret", "Socks"]);
        let mut out = Vec::new();

        let summary = run_walkthrough(&mut shop, &mut out, OutputFormat::Text).unwrap();
        assert_eq!(summary.total, Money::from_units(300));
        assert_eq!(summary.login, "alice");

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Register a new user\nLog in\nWelcome, alice\n"));
        assert!(text.contains(
            "Underwear\n\
             \tProduct: Boxers, price: 150.00, rating: 1\n\
             \tProduct: Boxers 2, price: 150.00, rating: 1\n\
             \tProduct: Boxers 1, price: 150.00, rating: 1\n\
             \tProduct: Boxers 2, price: 150.00, rating: 1\n\
             Socks\n"
        ));
        assert!(text.ends_with("Total due: 300.00\n"));

        assert_eq!(shop.products().len(), 1);
        assert_eq!(shop.categories().len(), 2);
    }

    #[test]
    fn test_json_output() {
        let mut shop = shop(&["bob", "pw", "bob", "pw", "Hats"]);
        let mut out = Vec::new();

        run_walkthrough(&mut shop, &mut out, OutputFormat::Json).unwrap();

        let text = String::from_utf8(out).unwrap();
        let last = text.lines().last().unwrap();
        let json: serde_json::Value = serde_json::from_str(last).unwrap();
        assert_eq!(json["login"], "bob");
        assert_eq!(json["item_count"], 2);
        assert_eq!(json["total"], 30000);
    }

    #[test]
    fn test_wrong_password_stops_the_walkthrough() {
        let mut shop = shop(&["alice", "secret", "alice", "guess"]);
        let mut out = Vec::new();

        let err = run_walkthrough(&mut shop, &mut out, OutputFormat::Text).unwrap_err();
        let core = err.downcast_ref::<CoreError>().unwrap();
        assert!(matches!(core, CoreError::InvalidPassword { .. }));
        assert!(shop.current_user().is_none());
        assert!(shop.products().is_empty());
    }
}
