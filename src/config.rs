//! # Cafe Profile Configuration Module
//!
//! This module defines the static cafe profile (contact details, hours,
//! social links) and the canned welcome/help copy built from it. The profile
//! is defined once at configuration time and shared read-only for the
//! process lifetime.

// Environment variable names read at startup
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const MENU_DATA_PATH_ENV: &str = "MENU_DATA_PATH";
pub const DEFAULT_MENU_DATA_PATH: &str = "menu_data.json";

/// Static cafe profile: name, contact details, hours, and social links
#[derive(Debug, Clone)]
pub struct CafeProfile {
    /// Display name shown in headers (includes emoji)
    pub name: String,
    /// One-line tagline shown under the name
    pub tagline: String,
    /// Longer blurb for the welcome message
    pub description: String,
    /// General inquiries phone number
    pub phone: String,
    /// General inquiries email
    pub email: String,
    /// Street address
    pub address: String,
    /// Opening hours, preformatted
    pub hours: String,
    /// Website URL shown in contact info
    pub website: String,
    /// Instagram handle
    pub instagram: String,
    /// Dedicated phone number for placing orders
    pub order_phone: String,
    /// Dedicated email for placing orders
    pub order_email: String,
}

impl Default for CafeProfile {
    fn default() -> Self {
        Self {
            name: "☕ The Artisan Cafe".to_string(),
            tagline: "Crafting Perfect Moments, One Cup at a Time".to_string(),
            description: "Welcome to The Artisan Cafe! ☕✨\n\n\
                We're passionate about serving the finest coffee, freshly baked \
                pastries, and delicious meals in a warm, welcoming atmosphere.\n\n\
                🌟 What makes us special:\n\
                • Premium coffee beans from around the world\n\
                • Freshly baked pastries daily\n\
                • Cozy atmosphere perfect for work or relaxation\n\
                • Friendly staff who love what they do"
                .to_string(),
            phone: "+1 (555) 123-CAFE".to_string(),
            email: "hello@artisancafe.com".to_string(),
            address: "123 Coffee Street, Brew City, BC 12345".to_string(),
            hours: "📅 Opening Hours:\n\
                Monday - Friday: 6:30 AM - 8:00 PM\n\
                Saturday - Sunday: 7:00 AM - 9:00 PM"
                .to_string(),
            website: "www.artisancafe.com".to_string(),
            instagram: "@artisancafe".to_string(),
            order_phone: "+1 (555) 123-ORDER".to_string(),
            order_email: "orders@artisancafe.com".to_string(),
        }
    }
}

impl CafeProfile {
    /// Welcome message sent on /start, used as a photo caption when a cafe
    /// interior photo is available
    pub fn welcome_message(&self) -> String {
        format!(
            "🎉 {} 🎉\n\n{}\n\n{}\n\nUse the buttons below to explore our menu, \
             get contact information, or learn more about us!",
            self.name, self.tagline, self.description
        )
    }

    /// Help message listing the available commands
    pub fn help_message(&self) -> String {
        "🤖 How to use this bot:\n\n\
         /start - Welcome message and main menu\n\
         /menu - Browse our delicious menu\n\
         /contact - Get our contact information\n\
         /location - Find us and see our hours\n\
         /cart - View your cart\n\
         /help - Show this help message\n\n\
         Use the interactive buttons to navigate through our menu categories, \
         view our offerings, and build your order!"
            .to_string()
    }
}
