//! # shop-core: Domain Logic for a Small In-Memory Shop
//!
//! Users, a product catalog, categories and per-user baskets, coordinated by
//! a single [`Shop`]. Nothing here touches a console, a file or a network;
//! operator input arrives through the [`Prompt`] trait.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shop-cli (binary)                            │   │
//! │  │    config loading ─► logging ─► ConsolePrompt ─► walk-through   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Shop<ConsolePrompt>                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   shop    │  │  product  │  │  basket   │  │ validation│  │   │
//! │  │   │  session  │  │ category  │  │   user    │  │   money   │  │   │
//! │  │   │  render   │  │   types   │  │  prompt   │  │   error   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • IN-MEMORY • SINGLE-THREADED                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`shop`] - The `Shop` orchestrator: users, session, catalog, cart
//! - [`product`] / [`category`] - Catalog entities and shared product handles
//! - [`basket`] / [`user`] - Customers, password digests and their baskets
//! - [`money`] - Integer money, parsed once from operator input
//! - [`validation`] - Input-boundary coercion
//! - [`prompt`] - The operator prompt/response boundary
//! - [`config`] - Shop configuration data
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Money, Product, ScriptedPrompt, Shop, ShopConfig, User};
//!
//! let mut shop = Shop::new(ShopConfig::named("corner shop"), ScriptedPrompt::empty());
//! shop.add_user(Some(User::new("alice", Some("wonderland")))).unwrap();
//! shop.authenticate_with("alice", "wonderland").unwrap();
//!
//! for price in [100, 150, 150] {
//!     shop.add_to_cart(&Product::new("Boxers", Money::from_units(price)));
//! }
//! assert_eq!(shop.checkout().unwrap().total, Money::from_units(400));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod category;
pub mod config;
pub mod error;
pub mod money;
pub mod product;
pub mod prompt;
mod render;
pub mod shop;
pub mod types;
pub mod user;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{Basket, BasketItem};
pub use category::Category;
pub use config::ShopConfig;
pub use error::{CoreError, CoreResult, PromptError, ValidationError};
pub use money::Money;
pub use product::{Product, SharedProduct};
pub use prompt::{Prompt, ScriptedPrompt};
pub use shop::{AddedProduct, CategorySelector, CheckoutSummary, Shop};
pub use types::{CategoryId, ProductId};
pub use user::User;
