//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles the chat commands (/start, /menu, ...)
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates keyboards and formats messages

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

use crate::cart::CartManager;
use crate::config::CafeProfile;
use crate::menu::Catalog;

/// Shared read-mostly state injected into every handler. The catalog and
/// profile are immutable after startup; carts carry their own locking.
#[derive(Debug)]
pub struct BotContext {
    pub catalog: Catalog,
    pub profile: CafeProfile,
    pub carts: CartManager,
}

impl BotContext {
    pub fn new(catalog: Catalog, profile: CafeProfile) -> Self {
        Self {
            catalog,
            profile,
            carts: CartManager::new(),
        }
    }
}
