use shop_core::{
    CategorySelector, CoreError, Money, Product, ScriptedPrompt, Shop, ShopConfig, SharedProduct,
    User,
};

fn shop(answers: &[&str]) -> Shop<ScriptedPrompt> {
    Shop::new(
        ShopConfig::named("flow"),
        ScriptedPrompt::new(answers.iter().copied()),
    )
}

// Register two users, log in as one, fail a login, shop and check out.
#[test]
fn register_login_shop_and_checkout() -> anyhow::Result<()> {
    let mut shop = shop(&["alice", "wonderland", "bob", "builder", "alice", "wonderland"]);
    shop.add_user(None)?;
    shop.add_user(None)?;

    let alice = shop.authenticate()?;
    assert_eq!(alice.login(), "alice");

    // Wrong password: error, session unchanged
    let err = shop.authenticate_with("bob", "wrecker").unwrap_err();
    assert!(matches!(err, CoreError::InvalidPassword { .. }));
    assert_eq!(shop.current_user().map(User::login), Some("alice"));

    for price in [100, 150, 150] {
        shop.add_to_cart(&Product::new("Boxers", Money::from_units(price)));
    }

    let summary = shop.checkout()?;
    assert_eq!(summary.total, Money::from_units(400));
    assert_eq!(summary.login, "alice");

    // The registered user's own basket grew, and checkout left it intact.
    let stored = shop.find_user("alice").expect("alice is registered");
    assert_eq!(stored.basket().item_count(), 3);
    Ok(())
}

// Catalog and categories, including the same instance in two categories.
#[test]
fn categories_share_product_instances() -> anyhow::Result<()> {
    let mut shop = shop(&["Socks"]);
    let underwear = shop.create_category("Underwear");
    let socks = shop.create_new_category()?;

    let boxers = SharedProduct::from(Product::new("Boxers", Money::from_units(150)));
    shop.add_shared_product(boxers.clone());

    shop.add_products_to_category([boxers.clone()], CategorySelector::Id(underwear))?;
    shop.add_products_to_category([boxers.clone()], CategorySelector::name("Socks"))?;

    assert_eq!(boxers.borrow().category_id(), socks);
    for id in [underwear, socks] {
        let category = shop.find_category(id).expect("category exists");
        assert!(category.contains(&boxers));
    }

    // The catalog sees the re-stamped id through the shared handle.
    assert_eq!(shop.products()[0].borrow().category_id(), socks);

    let rendered = shop.render_categories_with_products();
    assert_eq!(rendered.matches("Product: Boxers").count(), 2);
    Ok(())
}

#[test]
fn product_ids_increase_across_construction_paths() -> anyhow::Result<()> {
    let mut shop = shop(&["Typed", "9.99", "3"]);
    let first = shop.add_product(Some(Product::named("Given")))?;
    let second = shop.add_product(None)?;

    assert!(second.id > first.id);
    assert_eq!(shop.products()[1].borrow().price(), Money::from_minor(999));
    Ok(())
}

#[test]
fn type_mismatch_leaves_no_partial_state() {
    let mut shop = shop(&["Boxers", "one fifty", "5"]);
    let err = shop.add_product(None).unwrap_err();

    assert!(err.is_type_mismatch());
    assert!(shop.products().is_empty());
    assert_eq!(shop.render_products(), "");
}

#[test]
fn default_session_user_is_fresh() {
    let mut shop = shop(&[]);
    shop.add_to_cart(&Product::named("Hat"));

    shop.set_current_user(None);
    let user = shop.current_user().expect("default user installed");
    assert_eq!(user.login(), "default_user");
    assert!(user.basket().is_empty());
}

#[test]
fn checkout_summary_serializes() -> anyhow::Result<()> {
    let mut shop = shop(&[]);
    shop.add_to_cart(&Product::new("Hat", Money::from_minor(1050)));

    let json = serde_json::to_value(shop.checkout()?)?;
    assert_eq!(json["login"], "default_user");
    assert_eq!(json["item_count"], 1);
    assert_eq!(json["total"], 1050);
    Ok(())
}
