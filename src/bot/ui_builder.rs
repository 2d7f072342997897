//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::callback::CallbackAction;
use crate::cart::Cart;
use crate::config::CafeProfile;
use crate::menu::{Catalog, Category, MenuItem};

fn callback_button(text: impl Into<String>, action: CallbackAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, action.as_data())
}

/// Create the main menu keyboard with one button per category plus the
/// contact, location, cart, and order shortcuts
pub fn create_main_menu_keyboard(catalog: &Catalog) -> InlineKeyboardMarkup {
    let mut buttons: Vec<Vec<InlineKeyboardButton>> = catalog
        .categories
        .iter()
        .map(|category| {
            vec![callback_button(
                category.name.clone(),
                CallbackAction::Category(category.id.clone()),
            )]
        })
        .collect();

    buttons.push(vec![callback_button("📞 Contact Info", CallbackAction::Contact)]);
    buttons.push(vec![callback_button("📍 Location & Hours", CallbackAction::Location)]);
    buttons.push(vec![callback_button("🛒 View Cart", CallbackAction::ShowCart)]);
    buttons.push(vec![callback_button("📱 Place Order", CallbackAction::OrderInfo)]);

    InlineKeyboardMarkup::new(buttons)
}

/// Create the keyboard for one category: item buttons laid out two per row
/// for a better mobile experience, then navigation buttons
pub fn create_category_keyboard(category: &Category) -> InlineKeyboardMarkup {
    let mut buttons: Vec<Vec<InlineKeyboardButton>> = category
        .items
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|item| {
                    callback_button(
                        format!("{} - {}", item.name, item.price()),
                        CallbackAction::Item(item.id.clone()),
                    )
                })
                .collect()
        })
        .collect();

    buttons.push(vec![callback_button("🔙 Back to Menu", CallbackAction::MainMenu)]);
    buttons.push(vec![callback_button("📱 Place Order", CallbackAction::OrderInfo)]);

    InlineKeyboardMarkup::new(buttons)
}

/// Create the keyboard for a single item view. The back button carries the
/// owning category's id so navigation needs no per-user state.
pub fn create_item_keyboard(item_id: &str, category_id: &str) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![callback_button(
            "🛒 Add to Cart",
            CallbackAction::AddToCart(item_id.to_string()),
        )],
        vec![callback_button(
            "📱 Order This Item",
            CallbackAction::OrderItem(item_id.to_string()),
        )],
        vec![callback_button(
            "🔙 Back to Category",
            CallbackAction::Category(category_id.to_string()),
        )],
        vec![callback_button("🏠 Main Menu", CallbackAction::MainMenu)],
    ])
}

/// Create the quantity stepper shown right after an item lands in the cart
pub fn create_quantity_keyboard(item_id: &str, quantity: u32) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            callback_button("➖", CallbackAction::Decrease(item_id.to_string())),
            callback_button(quantity.to_string(), CallbackAction::Item(item_id.to_string())),
            callback_button("➕", CallbackAction::Increase(item_id.to_string())),
        ],
        vec![callback_button("🛒 View Cart", CallbackAction::ShowCart)],
        vec![callback_button("🍴 Continue Shopping", CallbackAction::MainMenu)],
    ])
}

/// Create the cart view keyboard: a quantity stepper row per entry, then
/// place-order (only when the cart has something), continue, and clear
pub fn create_cart_keyboard(cart: &Cart, catalog: &Catalog) -> InlineKeyboardMarkup {
    let mut buttons: Vec<Vec<InlineKeyboardButton>> = cart
        .entries()
        .iter()
        .filter_map(|entry| {
            let item = catalog.item(&entry.item_id)?;
            Some(vec![
                callback_button("➖", CallbackAction::Decrease(entry.item_id.clone())),
                callback_button(
                    format!("{} ({})", item.name, entry.quantity),
                    CallbackAction::Item(entry.item_id.clone()),
                ),
                callback_button("➕", CallbackAction::Increase(entry.item_id.clone())),
            ])
        })
        .collect();

    if !cart.is_empty() {
        buttons.push(vec![callback_button("📋 Place Order", CallbackAction::PlaceOrder)]);
    }
    buttons.push(vec![callback_button("🍴 Continue Shopping", CallbackAction::MainMenu)]);
    buttons.push(vec![callback_button("🗑️ Clear Cart", CallbackAction::ClearCart)]);

    InlineKeyboardMarkup::new(buttons)
}

/// Create the keyboard shown with ordering instructions
pub fn create_order_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![callback_button("📞 Call to Order", CallbackAction::CallOrder)],
        vec![callback_button("📧 Email Order", CallbackAction::EmailOrder)],
        vec![callback_button("🔙 Back to Menu", CallbackAction::MainMenu)],
    ])
}

/// Create the keyboard shown with contact information
pub fn create_contact_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![callback_button("📞 Call Us", CallbackAction::CallCafe)],
        vec![callback_button("📧 Email Us", CallbackAction::EmailCafe)],
        vec![callback_button("🌐 Visit Website", CallbackAction::Website)],
        vec![callback_button("📱 Instagram", CallbackAction::Instagram)],
        vec![callback_button("🔙 Back to Menu", CallbackAction::MainMenu)],
    ])
}

/// Create the minimal back-to-menu keyboard
pub fn create_back_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![callback_button(
        "🔙 Back to Menu",
        CallbackAction::MainMenu,
    )]])
}

/// Format the menu overview shown by /menu and the main menu view
pub fn format_menu_overview() -> String {
    "🍽️ **Our Menu** 🍽️\n\n\
     Explore our delicious offerings by category:\n\
     • Fresh coffee and specialty drinks\n\
     • Hearty meals and light bites\n\
     • Sweet pastries and desserts\n\n\
     Choose a category to see our full selection!"
        .to_string()
}

/// Format a category overview message
pub fn format_category_message(category: &Category) -> String {
    format!(
        "{} **{}** {}\n\n{}\n\nChoose an item below to see details! 👇",
        category.emoji, category.name, category.emoji, category.description
    )
}

/// Format a single item's details
pub fn format_item_message(item: &MenuItem) -> String {
    format!(
        "✨ **{}** ✨\n\n📝 {}\n\n💰 **Price:** {}\n\n\
         Ready to order? Use the buttons below! 👇",
        item.name,
        item.description,
        item.price()
    )
}

fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Format the cart view with per-line totals and the grand total. Entries
/// whose item vanished from the catalog are skipped, matching the keyboard.
pub fn format_cart_message(cart: &Cart, catalog: &Catalog) -> String {
    let mut text = String::from("🛒 **Your Cart**\n\n");

    for entry in cart.entries() {
        if let Some(item) = catalog.item(&entry.item_id) {
            let line_total = u64::from(item.price_cents) * u64::from(entry.quantity);
            text.push_str(&format!(
                "**{}**\n💰 {} × {} = {}\n\n",
                item.name,
                item.price(),
                entry.quantity,
                format_cents(line_total)
            ));
        }
    }

    text.push_str(&format!(
        "💰 **Total: {}**",
        format_cents(cart.total_cents(catalog))
    ));
    text
}

/// Format the empty-cart message
pub fn format_empty_cart_message() -> String {
    "🛒 Your cart is empty!\n\nBrowse our menu to add some delicious items.".to_string()
}

/// Format the toast shown after adding an item to the cart
pub fn format_added_to_cart(item: &MenuItem) -> String {
    format!("✅ {} added to cart!", item.name)
}

/// Format the message body shown with the quantity stepper
pub fn format_added_to_cart_message(item: &MenuItem, quantity: u32) -> String {
    format!(
        "**{}** added to cart!\n\n💰 Price: {}\n📝 {}\n\n\
         In cart: {} — adjust quantity or continue shopping:",
        item.name,
        item.price(),
        item.description,
        quantity
    )
}

/// Format the contact information message
pub fn format_contact_message(profile: &CafeProfile) -> String {
    format!(
        "📞 **Contact {}** 📞\n\n\
         **Phone:** {}\n\
         **Email:** {}\n\
         **Website:** {}\n\
         **Instagram:** {}\n\n\
         **Address:**\n{}\n\n\
         We'd love to hear from you! 💌",
        profile.name, profile.phone, profile.email, profile.website, profile.instagram,
        profile.address
    )
}

/// Format the location and hours message
pub fn format_location_message(profile: &CafeProfile) -> String {
    format!(
        "📍 **Find {}** 📍\n\n\
         **Address:**\n{}\n\n\
         {}\n\n\
         🚗 Parking available\n\
         🚌 Public transit accessible\n\
         ♿ Wheelchair accessible\n\n\
         See you soon! ✨",
        profile.name, profile.address, profile.hours
    )
}

/// Format the general ordering instructions
pub fn format_order_message(profile: &CafeProfile) -> String {
    format!(
        "📱 **Ready to Order?** 📱\n\n\
         **Call to Order:**\n📞 {}\n\n\
         **Email Your Order:**\n📧 {}\n\n\
         **Order Information:**\n\
         • Please specify items and quantities\n\
         • Include your contact information\n\
         • Mention pickup or delivery preference\n\
         • We'll confirm your order promptly!\n\n\
         🎉 Thank you for choosing {}!",
        profile.order_phone, profile.order_email, profile.name
    )
}

/// Format the ordering instructions for one specific item
pub fn format_order_item_message(profile: &CafeProfile, item: &MenuItem) -> String {
    format!(
        "📱 **Order: {}** 📱\n\n\
         **Price:** {}\n\n\
         **To place your order:**\n\n\
         📞 **Call:** {}\n\
         📧 **Email:** {}\n\n\
         **Please mention:**\n\
         • Item: {}\n\
         • Quantity desired\n\
         • Your contact information\n\
         • Pickup or delivery preference\n\n\
         We'll have your order ready! 🎉",
        item.name,
        item.price(),
        profile.order_phone,
        profile.order_email,
        item.name
    )
}

/// Format the hand-off message for a filled cart: the line items to read out
/// over the phone or paste into an email
pub fn format_place_order_message(profile: &CafeProfile, cart: &Cart, catalog: &Catalog) -> String {
    let mut lines = String::new();
    for entry in cart.entries() {
        if let Some(item) = catalog.item(&entry.item_id) {
            lines.push_str(&format!("• {} × {}\n", entry.quantity, item.name));
        }
    }

    format!(
        "📋 **Your Order** 📋\n\n\
         {}\n💰 **Total: {}**\n\n\
         **To place this order:**\n\
         📞 **Call:** {}\n\
         📧 **Email:** {}\n\n\
         Read out or copy the list above and we'll have it ready! 🎉",
        lines,
        format_cents(cart.total_cents(catalog)),
        profile.order_phone,
        profile.order_email
    )
}

/// Format the phone call-to-action for placing orders
pub fn format_call_order_message(profile: &CafeProfile) -> String {
    format!(
        "📞 **Call to Order**\n\n{}\n\nTap the number to call on mobile devices!",
        profile.order_phone
    )
}

/// Format the email call-to-action for placing orders
pub fn format_email_order_message(profile: &CafeProfile) -> String {
    format!(
        "📧 **Email Your Order**\n\n{}\n\nSend us your order details and we'll get back to you!",
        profile.order_email
    )
}

/// Format the general phone call-to-action
pub fn format_call_cafe_message(profile: &CafeProfile) -> String {
    format!(
        "📞 **Call Us**\n\n{}\n\nTap the number to call on mobile devices!",
        profile.phone
    )
}

/// Format the general email call-to-action
pub fn format_email_cafe_message(profile: &CafeProfile) -> String {
    format!("📧 **Email Us**\n\n{}\n\nWe'd love to hear from you!", profile.email)
}

/// Format the website link message
pub fn format_website_message(profile: &CafeProfile) -> String {
    format!(
        "🌐 **Visit Our Website**\n\n{}\n\nDiscover more about our story and offerings!",
        profile.website
    )
}

/// Format the Instagram link message
pub fn format_instagram_message(profile: &CafeProfile) -> String {
    format!(
        "📱 **Follow Us on Instagram**\n\n{}\n\nSee our latest creations and cafe life!",
        profile.instagram
    )
}
