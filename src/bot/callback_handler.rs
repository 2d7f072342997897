//! Callback Handler module for processing inline keyboard callback queries
//!
//! Every button press carries its full navigation target in the callback
//! data, so handling is stateless: parse the identifier, look the target up
//! in the catalog, render the view in place.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId, ParseMode, UserId};
use tracing::{debug, error, warn};

use crate::callback::CallbackAction;

use super::ui_builder::{
    create_back_keyboard, create_cart_keyboard, create_category_keyboard,
    create_contact_keyboard, create_item_keyboard, create_main_menu_keyboard,
    create_order_keyboard, create_quantity_keyboard, format_added_to_cart,
    format_added_to_cart_message, format_call_cafe_message, format_call_order_message,
    format_cart_message, format_category_message, format_contact_message,
    format_email_cafe_message, format_email_order_message, format_empty_cart_message,
    format_instagram_message, format_item_message, format_location_message,
    format_menu_overview, format_order_item_message, format_order_message,
    format_place_order_message, format_website_message,
};
use super::BotContext;

/// Fallback toast for callback data this bot no longer understands
const STALE_BUTTON_TOAST: &str = "That button is out of date. Use /start to refresh the menu.";

/// The message a pressed button lives on
struct ViewTarget {
    chat_id: ChatId,
    message_id: MessageId,
    has_photo: bool,
}

/// Handle callback queries from inline keyboards. Always answers the query
/// so the client's loading spinner clears, optionally with a toast text.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, ctx: Arc<BotContext>) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "Received callback query");

    let action = q.data.as_deref().and_then(CallbackAction::parse);
    let target = q.message.as_ref().map(|msg| ViewTarget {
        chat_id: msg.chat().id,
        message_id: msg.id(),
        // The /start welcome is a photo message; its caption cannot be
        // edited into a text body, so such messages get replaced instead
        has_photo: msg
            .regular_message()
            .is_some_and(|m| m.photo().is_some()),
    });

    let toast = match (action, target) {
        (Some(action), Some(target)) => {
            dispatch(&bot, q.from.id, &ctx, action, &target).await?
        }
        (None, _) => {
            warn!(user_id = %q.from.id, data = ?q.data, "Unknown callback data");
            Some(STALE_BUTTON_TOAST.to_string())
        }
        // The originating message is no longer accessible; nothing to render
        (Some(_), None) => Some(STALE_BUTTON_TOAST.to_string()),
    };

    // Answer the callback query to remove the loading state
    let mut answer = bot.answer_callback_query(q.id);
    if let Some(text) = toast {
        answer = answer.text(text);
    }
    answer.await?;

    Ok(())
}

/// Route a parsed action to its view. Returns the toast to attach to the
/// callback answer, if any.
async fn dispatch(
    bot: &Bot,
    user_id: UserId,
    ctx: &BotContext,
    action: CallbackAction,
    target: &ViewTarget,
) -> Result<Option<String>> {
    let catalog = &ctx.catalog;
    let profile = &ctx.profile;

    match action {
        CallbackAction::MainMenu => {
            render(bot, target, format_menu_overview(), create_main_menu_keyboard(catalog)).await;
            Ok(None)
        }
        CallbackAction::Category(category_id) => {
            match catalog.category(&category_id) {
                Some(category) => {
                    render(
                        bot,
                        target,
                        format_category_message(category),
                        create_category_keyboard(category),
                    )
                    .await;
                }
                None => {
                    render(
                        bot,
                        target,
                        "Sorry, this category is not available.".to_string(),
                        create_back_keyboard(),
                    )
                    .await;
                }
            }
            Ok(None)
        }
        CallbackAction::Item(item_id) => {
            match (catalog.item(&item_id), catalog.category_of_item(&item_id)) {
                (Some(item), Some(category)) => {
                    render(
                        bot,
                        target,
                        format_item_message(item),
                        create_item_keyboard(&item.id, &category.id),
                    )
                    .await;
                }
                _ => {
                    render(
                        bot,
                        target,
                        "Sorry, this item is not available.".to_string(),
                        create_back_keyboard(),
                    )
                    .await;
                }
            }
            Ok(None)
        }
        CallbackAction::Contact => {
            render(bot, target, format_contact_message(profile), create_contact_keyboard()).await;
            Ok(None)
        }
        CallbackAction::Location => {
            render(bot, target, format_location_message(profile), create_back_keyboard()).await;
            Ok(None)
        }
        CallbackAction::OrderInfo => {
            render(bot, target, format_order_message(profile), create_order_keyboard()).await;
            Ok(None)
        }
        CallbackAction::OrderItem(item_id) => {
            match catalog.item(&item_id) {
                Some(item) => {
                    render(
                        bot,
                        target,
                        format_order_item_message(profile, item),
                        create_order_keyboard(),
                    )
                    .await;
                }
                None => {
                    render(
                        bot,
                        target,
                        "Sorry, this item is not available.".to_string(),
                        create_back_keyboard(),
                    )
                    .await;
                }
            }
            Ok(None)
        }
        CallbackAction::CallOrder => {
            render(bot, target, format_call_order_message(profile), create_back_keyboard()).await;
            Ok(None)
        }
        CallbackAction::EmailOrder => {
            render(bot, target, format_email_order_message(profile), create_back_keyboard()).await;
            Ok(None)
        }
        CallbackAction::CallCafe => {
            render(bot, target, format_call_cafe_message(profile), create_contact_keyboard()).await;
            Ok(None)
        }
        CallbackAction::EmailCafe => {
            render(bot, target, format_email_cafe_message(profile), create_contact_keyboard())
                .await;
            Ok(None)
        }
        CallbackAction::Website => {
            render(bot, target, format_website_message(profile), create_contact_keyboard()).await;
            Ok(None)
        }
        CallbackAction::Instagram => {
            render(bot, target, format_instagram_message(profile), create_contact_keyboard())
                .await;
            Ok(None)
        }
        CallbackAction::AddToCart(item_id) => {
            let Some(item) = catalog.item(&item_id) else {
                return Ok(Some("Item not found!".to_string()));
            };
            if !ctx.carts.add_item(user_id, &item_id, 1).await {
                return Ok(Some(
                    "Your cart is full! Remove something before adding more.".to_string(),
                ));
            }
            let quantity = ctx.carts.item_quantity(user_id, &item_id).await;
            render(
                bot,
                target,
                format_added_to_cart_message(item, quantity),
                create_quantity_keyboard(&item_id, quantity),
            )
            .await;
            Ok(Some(format_added_to_cart(item)))
        }
        CallbackAction::ShowCart => {
            render_cart(bot, user_id, ctx, target).await;
            Ok(None)
        }
        CallbackAction::Increase(item_id) => {
            let quantity = ctx.carts.item_quantity(user_id, &item_id).await + 1;
            ctx.carts.update_quantity(user_id, &item_id, quantity).await;
            render_cart(bot, user_id, ctx, target).await;
            Ok(Some(format!("Quantity updated to {quantity}")))
        }
        CallbackAction::Decrease(item_id) => {
            let quantity = ctx.carts.item_quantity(user_id, &item_id).await.saturating_sub(1);
            ctx.carts.update_quantity(user_id, &item_id, quantity).await;
            render_cart(bot, user_id, ctx, target).await;
            if quantity == 0 {
                Ok(Some("Item removed from cart!".to_string()))
            } else {
                Ok(Some(format!("Quantity updated to {quantity}")))
            }
        }
        CallbackAction::ClearCart => {
            ctx.carts.clear(user_id).await;
            render(bot, target, format_empty_cart_message(), create_back_keyboard()).await;
            Ok(Some("Cart cleared".to_string()))
        }
        CallbackAction::PlaceOrder => {
            let cart = ctx.carts.cart(user_id).await;
            if cart.is_empty() {
                return Ok(Some("Your cart is empty!".to_string()));
            }
            render(
                bot,
                target,
                format_place_order_message(profile, &cart, catalog),
                create_order_keyboard(),
            )
            .await;
            Ok(None)
        }
    }
}

/// Render the user's cart, or the empty-cart view
async fn render_cart(bot: &Bot, user_id: UserId, ctx: &BotContext, target: &ViewTarget) {
    let cart = ctx.carts.cart(user_id).await;
    if cart.is_empty() {
        render(bot, target, format_empty_cart_message(), create_back_keyboard()).await;
    } else {
        render(
            bot,
            target,
            format_cart_message(&cart, &ctx.catalog),
            create_cart_keyboard(&cart, &ctx.catalog),
        )
        .await;
    }
}

/// Show a view on the message the button lives on: edit text messages in
/// place, replace photo messages (captions cannot become text bodies).
/// Failures are logged rather than propagated so the callback still gets
/// answered.
async fn render(bot: &Bot, target: &ViewTarget, text: String, keyboard: InlineKeyboardMarkup) {
    if target.has_photo {
        if let Err(e) = bot.delete_message(target.chat_id, target.message_id).await {
            error!(chat_id = %target.chat_id, error = %e, "Failed to delete photo message");
        }
        if let Err(e) = bot
            .send_message(target.chat_id, text)
            .reply_markup(keyboard)
            .parse_mode(ParseMode::Markdown)
            .await
        {
            error!(chat_id = %target.chat_id, error = %e, "Failed to send replacement message");
        }
    } else if let Err(e) = bot
        .edit_message_text(target.chat_id, target.message_id, text)
        .reply_markup(keyboard)
        .parse_mode(ParseMode::Markdown)
        .await
    {
        // Re-pressing the current view's button makes this a no-op edit,
        // which Telegram reports as an error
        error!(chat_id = %target.chat_id, error = %e, "Failed to edit message");
    }
}
