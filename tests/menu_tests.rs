use cafebot::menu::{format_price, Catalog, MenuError};
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_catalog() -> Catalog {
    Catalog::from_json(
        r#"{
            "categories": [
                {
                    "id": "coffee",
                    "name": "☕ Coffee",
                    "emoji": "☕",
                    "description": "Hot drinks",
                    "items": [
                        {"id": "espresso", "name": "Espresso", "description": "Strong", "price_cents": 300},
                        {"id": "latte", "name": "Latte", "description": "Milky", "price_cents": 475}
                    ]
                },
                {
                    "id": "pastries",
                    "name": "🥐 Pastries",
                    "emoji": "🥐",
                    "description": "Baked daily",
                    "items": [
                        {"id": "croissant", "name": "Croissant", "description": "Flaky", "price_cents": 375}
                    ]
                }
            ],
            "cafe_images": ["https://example.com/interior.jpg"]
        }"#,
    )
    .expect("sample catalog should be valid")
}

/// Test that a category lookup returns exactly that category's items
#[test]
fn test_category_lookup_returns_its_items() {
    let catalog = sample_catalog();

    let coffee = catalog.category("coffee").expect("coffee should exist");
    let ids: Vec<&str> = coffee.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["espresso", "latte"]);

    let pastries = catalog.category("pastries").expect("pastries should exist");
    assert_eq!(pastries.items.len(), 1);
    assert_eq!(pastries.items[0].id, "croissant");
}

/// Test item lookup across categories and its owning-category lookup
#[test]
fn test_item_lookup_and_owning_category() {
    let catalog = sample_catalog();

    let croissant = catalog.item("croissant").expect("croissant should exist");
    assert_eq!(croissant.name, "Croissant");
    assert_eq!(croissant.price(), "$3.75");

    let owner = catalog
        .category_of_item("croissant")
        .expect("croissant should have a category");
    assert_eq!(owner.id, "pastries");
}

/// Test that unknown identifiers return None rather than panicking
#[test]
fn test_unknown_identifiers_return_none() {
    let catalog = sample_catalog();

    assert!(catalog.category("tea").is_none());
    assert!(catalog.item("scone").is_none());
    assert!(catalog.category_of_item("scone").is_none());
}

/// Test that malformed JSON fails at load time
#[test]
fn test_malformed_json_fails_at_load() {
    let result = Catalog::from_json("{not json");
    assert!(matches!(result, Err(MenuError::Parse(_))));
}

/// Test that a schema mismatch (missing fields) fails at load time
#[test]
fn test_missing_fields_fail_at_load() {
    let result = Catalog::from_json(r#"{"categories": [{"id": "a"}]}"#);
    assert!(matches!(result, Err(MenuError::Parse(_))));
}

/// Test that duplicate category ids are rejected
#[test]
fn test_duplicate_category_ids_rejected() {
    let json = r#"{
        "categories": [
            {"id": "a", "name": "A", "emoji": "☕", "description": "", "items": []},
            {"id": "a", "name": "B", "emoji": "☕", "description": "", "items": []}
        ]
    }"#;
    let result = Catalog::from_json(json);
    assert!(matches!(result, Err(MenuError::Validation(_))));
}

/// Test that duplicate item ids across categories are rejected
#[test]
fn test_duplicate_item_ids_across_categories_rejected() {
    let json = r#"{
        "categories": [
            {"id": "a", "name": "A", "emoji": "☕", "description": "", "items": [
                {"id": "x", "name": "One", "description": "", "price_cents": 100}
            ]},
            {"id": "b", "name": "B", "emoji": "🥐", "description": "", "items": [
                {"id": "x", "name": "Two", "description": "", "price_cents": 200}
            ]}
        ]
    }"#;
    let result = Catalog::from_json(json);
    assert!(matches!(result, Err(MenuError::Validation(_))));
}

/// Test that a missing data file is an Io error, not a panic
#[test]
fn test_missing_file_is_io_error() {
    let result = Catalog::load("/non/existent/menu_data.json");
    assert!(matches!(result, Err(MenuError::Io(_))));
}

/// Test loading from a file on disk
#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        r#"{
            "categories": [
                {"id": "a", "name": "A", "emoji": "☕", "description": "", "items": [
                    {"id": "x", "name": "One", "description": "", "price_cents": 100}
                ]}
            ]
        }"#
        .as_bytes(),
    )
    .unwrap();

    let catalog = Catalog::load(file.path()).expect("catalog should load from file");
    assert!(catalog.item("x").is_some());
    assert!(catalog.cafe_images.is_empty());
}

/// Test that a file containing invalid data fails at load, not at lookup
#[test]
fn test_invalid_file_fails_at_load() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"categories": []}"#).unwrap();

    let result = Catalog::load(file.path());
    assert!(matches!(result, Err(MenuError::Validation(_))));
}

/// Test that the shipped menu_data.json is valid
#[test]
fn test_shipped_menu_data_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/menu_data.json");
    let catalog = Catalog::load(path).expect("shipped menu_data.json should be valid");

    assert!(!catalog.categories.is_empty());
    assert!(!catalog.cafe_images.is_empty());
    for category in &catalog.categories {
        assert!(catalog.category(&category.id).is_some());
        for item in &category.items {
            assert_eq!(catalog.category_of_item(&item.id).unwrap().id, category.id);
        }
    }
}

/// Test price rendering edge cases
#[test]
fn test_price_formatting() {
    assert_eq!(format_price(300), "$3.00");
    assert_eq!(format_price(475), "$4.75");
    assert_eq!(format_price(5), "$0.05");
    assert_eq!(format_price(1050), "$10.50");
}
