//! # Cafe Telegram Bot
//!
//! A Telegram bot front-end for The Artisan Cafe: welcomes visitors with a
//! photo of the shop, lets them browse the menu tree with inline keyboards,
//! assemble an in-memory cart, and surfaces contact, location, and ordering
//! information.

pub mod bot;
pub mod callback;
pub mod cart;
pub mod config;
pub mod menu;
