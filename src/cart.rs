//! # Cart Module
//!
//! In-memory shopping carts, one per Telegram user. Carts never persist
//! across process restarts; placing an order hands off to the phone/email
//! flow rather than any payment or persistence layer.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use teloxide::types::UserId;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::menu::Catalog;

/// Upper bound on distinct items in a single cart
pub const MAX_CART_ITEMS: usize = 20;

/// One cart line: an item id and how many units of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub item_id: String,
    pub quantity: u32,
}

/// A single user's cart. Entries keep insertion order for display.
#[derive(Debug, Clone)]
pub struct Cart {
    entries: Vec<CartEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Cart {
    /// Entries in insertion order
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantity of a specific item, zero when absent
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item_id == item_id)
            .map(|e| e.quantity)
            .unwrap_or(0)
    }

    /// Total units across all entries
    pub fn total_units(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Total price in cents against the catalog. Entries whose item id is no
    /// longer in the catalog contribute nothing.
    pub fn total_cents(&self, catalog: &Catalog) -> u64 {
        self.entries
            .iter()
            .filter_map(|e| {
                catalog
                    .item(&e.item_id)
                    .map(|item| u64::from(item.price_cents) * u64::from(e.quantity))
            })
            .sum()
    }

    fn add(&mut self, item_id: &str, quantity: u32) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item_id == item_id) {
            entry.quantity += quantity;
        } else {
            if self.entries.len() >= MAX_CART_ITEMS {
                return false;
            }
            self.entries.push(CartEntry {
                item_id: item_id.to_string(),
                quantity,
            });
        }
        self.updated_at = Utc::now();
        true
    }

    fn set_quantity(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            self.entries.retain(|e| e.item_id != item_id);
        } else if let Some(entry) = self.entries.iter_mut().find(|e| e.item_id == item_id) {
            entry.quantity = quantity;
        } else if self.entries.len() < MAX_CART_ITEMS {
            self.entries.push(CartEntry {
                item_id: item_id.to_string(),
                quantity,
            });
        }
        self.updated_at = Utc::now();
    }
}

/// Manages all user carts behind an async mutex; shared via `Arc`
#[derive(Debug, Default)]
pub struct CartManager {
    carts: Mutex<HashMap<UserId, Cart>>,
}

impl CartManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add units of an item to the user's cart. Returns `false` when the
    /// distinct-item bound would be exceeded.
    pub async fn add_item(&self, user_id: UserId, item_id: &str, quantity: u32) -> bool {
        let mut carts = self.carts.lock().await;
        let cart = carts.entry(user_id).or_default();
        let added = cart.add(item_id, quantity);
        if added {
            debug!(user_id = %user_id, item_id, quantity, "Added item to cart");
        } else {
            warn!(user_id = %user_id, item_id, "Cart item limit exceeded");
        }
        added
    }

    /// Snapshot of the user's cart (empty cart when none exists)
    pub async fn cart(&self, user_id: UserId) -> Cart {
        self.carts
            .lock()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Set an item's quantity; zero removes the entry
    pub async fn update_quantity(&self, user_id: UserId, item_id: &str, quantity: u32) {
        let mut carts = self.carts.lock().await;
        let cart = carts.entry(user_id).or_default();
        cart.set_quantity(item_id, quantity);
        debug!(user_id = %user_id, item_id, quantity, "Updated cart quantity");
    }

    /// Quantity of a specific item in the user's cart
    pub async fn item_quantity(&self, user_id: UserId, item_id: &str) -> u32 {
        self.carts
            .lock()
            .await
            .get(&user_id)
            .map(|c| c.quantity(item_id))
            .unwrap_or(0)
    }

    /// Drop the user's cart entirely. Returns `false` when there was none.
    pub async fn clear(&self, user_id: UserId) -> bool {
        let removed = self.carts.lock().await.remove(&user_id).is_some();
        if removed {
            debug!(user_id = %user_id, "Cleared cart");
        }
        removed
    }
}
