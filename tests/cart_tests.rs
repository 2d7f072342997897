use cafebot::cart::{CartManager, MAX_CART_ITEMS};
use cafebot::menu::Catalog;
use teloxide::types::UserId;

const ALICE: UserId = UserId(1001);
const BOB: UserId = UserId(1002);

fn sample_catalog() -> Catalog {
    Catalog::from_json(
        r#"{
            "categories": [
                {"id": "coffee", "name": "☕ Coffee", "emoji": "☕", "description": "", "items": [
                    {"id": "espresso", "name": "Espresso", "description": "", "price_cents": 300},
                    {"id": "latte", "name": "Latte", "description": "", "price_cents": 475}
                ]}
            ]
        }"#,
    )
    .unwrap()
}

/// Test that a fresh user has an empty cart
#[tokio::test]
async fn test_fresh_cart_is_empty() {
    let carts = CartManager::new();

    let cart = carts.cart(ALICE).await;
    assert!(cart.is_empty());
    assert_eq!(cart.total_units(), 0);
}

/// Test adding items and quantity accumulation
#[tokio::test]
async fn test_add_items_accumulates_quantity() {
    let carts = CartManager::new();

    assert!(carts.add_item(ALICE, "espresso", 1).await);
    assert!(carts.add_item(ALICE, "espresso", 1).await);
    assert!(carts.add_item(ALICE, "latte", 2).await);

    assert_eq!(carts.item_quantity(ALICE, "espresso").await, 2);
    assert_eq!(carts.item_quantity(ALICE, "latte").await, 2);
    assert_eq!(carts.cart(ALICE).await.total_units(), 4);
}

/// Test that carts are isolated per user
#[tokio::test]
async fn test_carts_are_per_user() {
    let carts = CartManager::new();

    carts.add_item(ALICE, "espresso", 1).await;

    assert_eq!(carts.item_quantity(ALICE, "espresso").await, 1);
    assert_eq!(carts.item_quantity(BOB, "espresso").await, 0);
    assert!(carts.cart(BOB).await.is_empty());
}

/// Test that updating a quantity to zero removes the entry
#[tokio::test]
async fn test_update_quantity_zero_removes() {
    let carts = CartManager::new();

    carts.add_item(ALICE, "espresso", 3).await;
    carts.update_quantity(ALICE, "espresso", 0).await;

    assert_eq!(carts.item_quantity(ALICE, "espresso").await, 0);
    assert!(carts.cart(ALICE).await.is_empty());
}

/// Test cart totals computed against the catalog in integer cents
#[tokio::test]
async fn test_cart_total_in_cents() {
    let carts = CartManager::new();
    let catalog = sample_catalog();

    carts.add_item(ALICE, "espresso", 2).await; // 600
    carts.add_item(ALICE, "latte", 1).await; // 475

    let cart = carts.cart(ALICE).await;
    assert_eq!(cart.total_cents(&catalog), 1075);
}

/// Test that entries for items missing from the catalog contribute nothing
#[tokio::test]
async fn test_unknown_items_do_not_contribute_to_total() {
    let carts = CartManager::new();
    let catalog = sample_catalog();

    carts.add_item(ALICE, "espresso", 1).await;
    carts.add_item(ALICE, "discontinued", 5).await;

    let cart = carts.cart(ALICE).await;
    assert_eq!(cart.total_cents(&catalog), 300);
}

/// Test the distinct-item bound
#[tokio::test]
async fn test_distinct_item_bound() {
    let carts = CartManager::new();

    for i in 0..MAX_CART_ITEMS {
        assert!(carts.add_item(ALICE, &format!("item{i}"), 1).await);
    }
    assert!(!carts.add_item(ALICE, "one_too_many", 1).await);

    // Existing entries can still grow
    assert!(carts.add_item(ALICE, "item0", 1).await);
    assert_eq!(carts.item_quantity(ALICE, "item0").await, 2);
}

/// Test clearing a cart
#[tokio::test]
async fn test_clear_cart() {
    let carts = CartManager::new();

    carts.add_item(ALICE, "espresso", 2).await;
    assert!(carts.clear(ALICE).await);
    assert!(carts.cart(ALICE).await.is_empty());

    // Clearing an absent cart reports false
    assert!(!carts.clear(ALICE).await);
}

/// Test that cart snapshots preserve insertion order for display
#[tokio::test]
async fn test_cart_preserves_insertion_order() {
    let carts = CartManager::new();

    carts.add_item(ALICE, "latte", 1).await;
    carts.add_item(ALICE, "espresso", 1).await;

    let cart = carts.cart(ALICE).await;
    let ids: Vec<&str> = cart.entries().iter().map(|e| e.item_id.as_str()).collect();
    assert_eq!(ids, vec!["latte", "espresso"]);
}
