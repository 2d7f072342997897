//! # Menu Catalog Module
//!
//! This module defines the menu catalog: a static tree of categories, each
//! containing items with a name, description, and price. The catalog is
//! loaded once at startup from a JSON file, validated, and treated as
//! immutable for the process lifetime. Navigation never mutates it; every
//! view is a lookup against this tree.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Custom error types for catalog loading
#[derive(Debug, Clone)]
pub enum MenuError {
    /// Data file could not be read
    Io(String),
    /// Data file is not valid JSON or does not match the schema
    Parse(String),
    /// Data file parsed but violates a catalog invariant
    Validation(String),
}

impl std::fmt::Display for MenuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuError::Io(msg) => write!(f, "Menu data read error: {msg}"),
            MenuError::Parse(msg) => write!(f, "Menu data parse error: {msg}"),
            MenuError::Validation(msg) => write!(f, "Menu data validation error: {msg}"),
        }
    }
}

impl std::error::Error for MenuError {}

/// A single orderable item within a category
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    /// Stable identifier used in callback data
    pub id: String,
    /// Display name
    pub name: String,
    /// One or two sentence description
    pub description: String,
    /// Price in integer cents
    pub price_cents: u32,
}

impl MenuItem {
    /// Price rendered for display, e.g. `$4.50`
    pub fn price(&self) -> String {
        format_price(self.price_cents)
    }
}

/// A menu category with its items
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    /// Stable identifier used in callback data
    pub id: String,
    /// Display name shown on buttons (may include emoji)
    pub name: String,
    /// Emoji used when framing the category header
    pub emoji: String,
    /// Short blurb shown above the item list
    pub description: String,
    /// Items in display order
    pub items: Vec<MenuItem>,
}

/// The full menu catalog plus welcome-screen photos
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// Categories in display order
    pub categories: Vec<Category>,
    /// Cafe interior photo URLs for the /start welcome message
    #[serde(default)]
    pub cafe_images: Vec<String>,
}

impl Catalog {
    /// Load and validate the catalog from a JSON file.
    ///
    /// Any failure here is fatal at startup; the catalog is never reloaded
    /// mid-conversation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| MenuError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    /// Parse and validate the catalog from a JSON string
    pub fn from_json(content: &str) -> Result<Self, MenuError> {
        let catalog: Catalog =
            serde_json::from_str(content).map_err(|e| MenuError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check catalog invariants: non-empty catalog, non-empty unique
    /// category ids, non-empty item ids unique across the whole catalog,
    /// and non-empty display names.
    fn validate(&self) -> Result<(), MenuError> {
        if self.categories.is_empty() {
            return Err(MenuError::Validation("catalog has no categories".to_string()));
        }

        let mut category_ids = HashSet::new();
        let mut item_ids = HashSet::new();

        for category in &self.categories {
            if category.id.is_empty() {
                return Err(MenuError::Validation(format!(
                    "category '{}' has an empty id",
                    category.name
                )));
            }
            if category.name.is_empty() {
                return Err(MenuError::Validation(format!(
                    "category '{}' has an empty name",
                    category.id
                )));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(MenuError::Validation(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }

            for item in &category.items {
                if item.id.is_empty() {
                    return Err(MenuError::Validation(format!(
                        "item '{}' in category '{}' has an empty id",
                        item.name, category.id
                    )));
                }
                if item.name.is_empty() {
                    return Err(MenuError::Validation(format!(
                        "item '{}' in category '{}' has an empty name",
                        item.id, category.id
                    )));
                }
                // Item ids are global: callback data carries no category
                if !item_ids.insert(item.id.as_str()) {
                    return Err(MenuError::Validation(format!(
                        "duplicate item id '{}'",
                        item.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Look up a category by id
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Look up an item by id across all categories
    pub fn item(&self, item_id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|i| i.id == item_id)
    }

    /// Find the category an item belongs to
    pub fn category_of_item(&self, item_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.items.iter().any(|i| i.id == item_id))
    }
}

/// Render integer cents as `$X.YY`
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
