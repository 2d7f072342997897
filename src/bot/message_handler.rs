//! Message Handler module for processing incoming chat commands

use anyhow::Result;
use rand::seq::SliceRandom;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};
use tracing::{info, warn};

use super::ui_builder::{
    create_back_keyboard, create_cart_keyboard, create_contact_keyboard,
    create_main_menu_keyboard, format_cart_message, format_contact_message,
    format_empty_cart_message, format_location_message, format_menu_overview,
};
use super::BotContext;

/// Route an incoming message. Only text messages are meaningful to this bot;
/// anything else is ignored.
pub async fn message_handler(bot: Bot, msg: Message, ctx: Arc<BotContext>) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    info!(user_id = %msg.chat.id, text, "Received text message");

    // Commands arrive as "/start@BotName" in group chats
    let command = text.split_whitespace().next().unwrap_or("");
    let command = command.split('@').next().unwrap_or(command);

    match command {
        "/start" => handle_start(&bot, &msg, &ctx).await,
        "/menu" => handle_menu(&bot, &msg, &ctx).await,
        "/help" => handle_help(&bot, &msg, &ctx).await,
        "/contact" => handle_contact(&bot, &msg, &ctx).await,
        "/location" => handle_location(&bot, &msg, &ctx).await,
        "/cart" => handle_cart(&bot, &msg, &ctx).await,
        _ => handle_other_text(&bot, &msg).await,
    }
}

/// Handle /start: welcome message captioned onto a random cafe interior
/// photo, with a plain text fallback when no photo is usable
async fn handle_start(bot: &Bot, msg: &Message, ctx: &BotContext) -> Result<()> {
    let welcome = ctx.profile.welcome_message();
    let keyboard = create_main_menu_keyboard(&ctx.catalog);

    let photo_url = ctx
        .catalog
        .cafe_images
        .choose(&mut rand::thread_rng())
        .and_then(|raw| raw.parse::<url::Url>().ok());

    if let Some(photo_url) = photo_url {
        let sent = bot
            .send_photo(msg.chat.id, InputFile::url(photo_url))
            .caption(&welcome)
            .reply_markup(keyboard.clone())
            .parse_mode(ParseMode::Markdown)
            .await;

        match sent {
            Ok(_) => return Ok(()),
            Err(e) => {
                warn!(user_id = %msg.chat.id, error = %e, "Welcome photo rejected, falling back to text");
            }
        }
    }

    bot.send_message(msg.chat.id, welcome)
        .reply_markup(keyboard)
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}

async fn handle_menu(bot: &Bot, msg: &Message, ctx: &BotContext) -> Result<()> {
    bot.send_message(msg.chat.id, format_menu_overview())
        .reply_markup(create_main_menu_keyboard(&ctx.catalog))
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}

async fn handle_help(bot: &Bot, msg: &Message, ctx: &BotContext) -> Result<()> {
    bot.send_message(msg.chat.id, ctx.profile.help_message())
        .reply_markup(create_back_keyboard())
        .await?;
    Ok(())
}

async fn handle_contact(bot: &Bot, msg: &Message, ctx: &BotContext) -> Result<()> {
    bot.send_message(msg.chat.id, format_contact_message(&ctx.profile))
        .reply_markup(create_contact_keyboard())
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}

async fn handle_location(bot: &Bot, msg: &Message, ctx: &BotContext) -> Result<()> {
    bot.send_message(msg.chat.id, format_location_message(&ctx.profile))
        .reply_markup(create_back_keyboard())
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}

async fn handle_cart(bot: &Bot, msg: &Message, ctx: &BotContext) -> Result<()> {
    // /cart only works in private chats where the sender is known
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    let cart = ctx.carts.cart(user.id).await;
    if cart.is_empty() {
        bot.send_message(msg.chat.id, format_empty_cart_message())
            .reply_markup(create_back_keyboard())
            .await?;
    } else {
        bot.send_message(msg.chat.id, format_cart_message(&cart, &ctx.catalog))
            .reply_markup(create_cart_keyboard(&cart, &ctx.catalog))
            .parse_mode(ParseMode::Markdown)
            .await?;
    }
    Ok(())
}

/// Anything that is not a known command gets a short pointer at /menu
async fn handle_other_text(bot: &Bot, msg: &Message) -> Result<()> {
    bot.send_message(
        msg.chat.id,
        "I'm the menu bot for the cafe! ☕ Try /menu to browse our offerings, or /help to see everything I can do.",
    )
    .await?;
    Ok(())
}
