//! # Shop
//!
//! The single coordination point for users, the catalog, categories and the
//! session.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐  authenticate()   ┌────────────────────┐                │
//! │   │ nobody   │ ────────────────► │ registered user #i │◄──┐            │
//! │   └────┬─────┘                   └─────────┬──────────┘   │            │
//! │        │ add_to_cart / checkout            │ set_current_user(u)       │
//! │        │ set_current_user(None)            ▼              │            │
//! │        │                         ┌────────────────────┐   │            │
//! │        └───────────────────────► │ detached user      │───┘            │
//! │                                  │ (default or given) │ authenticate() │
//! │                                  └────────────────────┘                │
//! │                                                                         │
//! │  A failed authenticate() never changes the session.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations that lack an explicit argument ask the [`Prompt`] for one.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::category::Category;
use crate::config::{ShopConfig, DEFAULT_SHOP_NAME};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::product::{Product, SharedProduct, DEFAULT_RATING};
use crate::prompt::Prompt;
use crate::types::{CategoryId, ProductId};
use crate::user::User;
use crate::validation::{parse_price, parse_rating};

// =============================================================================
// Supporting Types
// =============================================================================

/// Picks exactly one category, by id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    Id(CategoryId),
    /// First category with this exact name.
    Name(String),
}

impl CategorySelector {
    pub fn name(name: impl Into<String>) -> Self {
        CategorySelector::Name(name.into())
    }
}

impl From<CategoryId> for CategorySelector {
    fn from(id: CategoryId) -> Self {
        CategorySelector::Id(id)
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::Id(id) => write!(f, "id {}", id),
            CategorySelector::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

/// Result of adding a product to the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddedProduct {
    pub id: ProductId,
    /// The operator's rating was not a plain integer, so the default was used.
    pub rating_defaulted: bool,
}

/// What checkout reports. The basket is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub login: String,
    pub item_count: usize,
    pub total: Money,
}

impl fmt::Display for CheckoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total due: {}", self.total)
    }
}

#[derive(Debug)]
enum SessionUser {
    /// Index into `Shop::users`, which is append-only.
    Registered(usize),
    Detached(User),
}

// =============================================================================
// Shop
// =============================================================================

/// An in-memory shop.
#[derive(Debug)]
pub struct Shop<P: Prompt> {
    name: String,
    config: ShopConfig,
    prompt: P,
    users: Vec<User>,
    products: Vec<SharedProduct>,
    categories: Vec<Category>,
    session: Option<SessionUser>,
}

impl<P: Prompt> Shop<P> {
    /// Creates an empty shop with nobody logged in.
    pub fn new(config: ShopConfig, prompt: P) -> Self {
        let name = match &config.shop_name {
            Some(name) => name.clone(),
            None => {
                warn!("no shop name configured, using {}", DEFAULT_SHOP_NAME);
                DEFAULT_SHOP_NAME.to_string()
            }
        };

        Shop {
            name,
            config,
            prompt,
            users: Vec::new(),
            products: Vec::new(),
            categories: Vec::new(),
            session: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// True when the shop is running under [`DEFAULT_SHOP_NAME`].
    pub fn uses_default_name(&self) -> bool {
        self.name == DEFAULT_SHOP_NAME
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    // =========================================================================
    // Users & Authentication
    // =========================================================================

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Registers a user, prompting for login and password when none is given.
    ///
    /// With `unique_logins` enabled an already-taken login is rejected and
    /// nothing is appended.
    pub fn add_user(&mut self, user: Option<User>) -> CoreResult<()> {
        let user = match user {
            Some(user) => user,
            None => {
                let login = self.prompt.ask("login")?;
                let password = self.prompt.ask("password")?;
                User::new(login, Some(&password))
            }
        };

        if self.config.unique_logins && self.find_user(user.login()).is_some() {
            return Err(ValidationError::Duplicate {
                field: "login".to_string(),
                value: user.login().to_string(),
            }
            .into());
        }

        debug!(login = user.login(), "user registered");
        self.users.push(user);
        Ok(())
    }

    /// First registered user with this login.
    pub fn find_user(&self, login: &str) -> Option<&User> {
        self.users.iter().find(|u| u.login() == login)
    }

    /// Prompts for login and password and logs the user in.
    pub fn authenticate(&mut self) -> CoreResult<&User> {
        let login = self.prompt.ask("login")?;
        if self.find_user(&login).is_none() {
            return Err(CoreError::UnknownUser(login));
        }
        let password = self.prompt.ask(&format!("password for {}", login))?;
        self.authenticate_with(&login, &password)
    }

    /// Logs in without prompting.
    ///
    /// ## Failure Modes
    /// - Unknown login → [`CoreError::UnknownUser`]
    /// - Digest mismatch → [`CoreError::InvalidPassword`]
    ///
    /// Either way the current session is left as it was.
    pub fn authenticate_with(&mut self, login: &str, password: &str) -> CoreResult<&User> {
        let index = self
            .users
            .iter()
            .position(|u| u.login() == login)
            .ok_or_else(|| CoreError::UnknownUser(login.to_string()))?;

        if !self.users[index].verify_password(password) {
            warn!(%login, "authentication failed: wrong password");
            return Err(CoreError::InvalidPassword {
                login: login.to_string(),
            });
        }

        info!(%login, "user authenticated");
        self.session = Some(SessionUser::Registered(index));
        Ok(&self.users[index])
    }

    /// The session user, if any.
    pub fn current_user(&self) -> Option<&User> {
        match self.session.as_ref()? {
            SessionUser::Registered(index) => self.users.get(*index),
            SessionUser::Detached(user) => Some(user),
        }
    }

    pub fn current_user_mut(&mut self) -> Option<&mut User> {
        match self.session.as_mut()? {
            SessionUser::Registered(index) => self.users.get_mut(*index),
            SessionUser::Detached(user) => Some(user),
        }
    }

    /// Replaces the session user.
    ///
    /// `None` installs a fresh default user with an empty basket. This is a
    /// session reset, never a merge with the previous user.
    ///
    /// The given user is owned by the session and is never matched against
    /// registered users. A clone of a registered user is a separate copy, so
    /// its cart does not reach the registered basket; use
    /// [`Shop::authenticate_with`] to shop as a registered user.
    pub fn set_current_user(&mut self, user: Option<User>) {
        let user = user.unwrap_or_else(|| self.default_user());
        info!(login = user.login(), "session user replaced");
        self.session = Some(SessionUser::Detached(user));
    }

    fn default_user(&self) -> User {
        User::new(self.config.default_user_name.clone(), None)
    }

    /// The session user, installing the default user first if nobody is set.
    fn session_user_mut(&mut self) -> &mut User {
        let default_login = &self.config.default_user_name;
        let session = self.session.get_or_insert_with(|| {
            info!("nobody logged in, installing default user");
            SessionUser::Detached(User::new(default_login.clone(), None))
        });

        match session {
            SessionUser::Registered(index) => &mut self.users[*index],
            SessionUser::Detached(user) => user,
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn products(&self) -> &[SharedProduct] {
        &self.products
    }

    /// Adds a product to the catalog, prompting for its fields when none is
    /// given.
    ///
    /// ## Prompted Input
    /// ```text
    /// product name    → taken as typed
    /// product price   → decimal amount, otherwise TypeMismatch (nothing added)
    /// product rating  → plain digits, otherwise 1.0 and rating_defaulted = true
    /// ```
    pub fn add_product(&mut self, product: Option<Product>) -> CoreResult<AddedProduct> {
        let (product, rating_defaulted) = match product {
            Some(product) => (product, false),
            None => self.prompt_product()?,
        };

        let added = AddedProduct {
            id: self.add_shared_product(product.into()),
            rating_defaulted,
        };
        Ok(added)
    }

    fn prompt_product(&mut self) -> CoreResult<(Product, bool)> {
        let name = self.prompt.ask("product name")?;
        let price = parse_price(&self.prompt.ask("product price")?)?;
        let rating = parse_rating(&self.prompt.ask("product rating")?);

        if rating.is_none() {
            warn!(%name, "rating is not a plain integer, using {}", DEFAULT_RATING);
        }
        let product = Product::with_rating(name, price, rating.unwrap_or(DEFAULT_RATING))?;
        Ok((product, rating.is_none()))
    }

    /// Adds each product through [`Shop::add_product`].
    pub fn add_products<I>(&mut self, products: I) -> CoreResult<Vec<AddedProduct>>
    where
        I: IntoIterator<Item = Product>,
    {
        products
            .into_iter()
            .map(|product| self.add_product(Some(product)))
            .collect()
    }

    /// Adds an existing shared handle to the catalog.
    pub fn add_shared_product(&mut self, product: SharedProduct) -> ProductId {
        let id = product.id();
        debug!(product = %id, "product added to catalog");
        self.products.push(product);
        id
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Creates an empty category and returns its id.
    pub fn create_category(&mut self, name: impl Into<String>) -> CategoryId {
        self.add_category(Category::new(name))
    }

    /// Creates a category named by the operator.
    pub fn create_new_category(&mut self) -> CoreResult<CategoryId> {
        let name = self.prompt.ask("category name")?;
        Ok(self.create_category(name))
    }

    pub fn add_category(&mut self, category: Category) -> CategoryId {
        let id = category.id();
        debug!(category = %id, name = category.name(), "category added");
        self.categories.push(category);
        id
    }

    pub fn add_categories<I>(&mut self, categories: I) -> Vec<CategoryId>
    where
        I: IntoIterator<Item = Category>,
    {
        categories
            .into_iter()
            .map(|category| self.add_category(category))
            .collect()
    }

    pub fn find_category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// First category with this exact name.
    pub fn find_category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Associates products with the selected category.
    ///
    /// The category is resolved before any product is touched, so a selector
    /// that matches nothing leaves every product as it was.
    ///
    /// ```rust
    /// use shop_core::{CategorySelector, Product, ScriptedPrompt, Shop, ShopConfig};
    ///
    /// let mut shop = Shop::new(ShopConfig::named("demo"), ScriptedPrompt::empty());
    /// let id = shop.create_category("Underwear");
    ///
    /// shop.add_products_to_category(vec![Product::named("Boxers")], CategorySelector::Id(id))
    ///     .unwrap();
    /// assert!(shop
    ///     .add_products_to_category(vec![Product::named("Hat")], CategorySelector::name("Hats"))
    ///     .is_err());
    /// ```
    pub fn add_products_to_category<I>(
        &mut self,
        products: I,
        selector: CategorySelector,
    ) -> CoreResult<CategoryId>
    where
        I: IntoIterator,
        I::Item: Into<SharedProduct>,
    {
        let category = match &selector {
            CategorySelector::Id(id) => self.categories.iter_mut().find(|c| c.id() == *id),
            CategorySelector::Name(name) => self.categories.iter_mut().find(|c| c.name() == name),
        }
        .ok_or_else(|| CoreError::CategoryNotFound(selector.to_string()))?;

        category.add_products(products);
        Ok(category.id())
    }

    // =========================================================================
    // Cart & Checkout
    // =========================================================================

    /// Appends a product snapshot to the session user's basket.
    pub fn add_to_cart(&mut self, product: &Product) {
        let user = self.session_user_mut();
        user.basket_mut().add_to_cart(product);
        debug!(login = user.login(), product = %product.id(), "added to cart");
    }

    /// Totals the session user's basket without clearing it.
    ///
    /// Fails with [`CoreError::TotalOverflow`] when the prices do not sum
    /// to a representable amount.
    pub fn checkout(&mut self) -> CoreResult<CheckoutSummary> {
        let user = self.session_user_mut();
        let basket = user.basket();
        let total = basket.total().ok_or_else(|| {
            warn!(login = user.login(), "basket total overflowed");
            CoreError::TotalOverflow {
                login: user.login().to_string(),
            }
        })?;
        let summary = CheckoutSummary {
            login: user.login().to_string(),
            item_count: basket.item_count(),
            total,
        };

        info!(
            login = %summary.login,
            items = summary.item_count,
            total = %summary.total,
            "checkout"
        );
        Ok(summary)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
