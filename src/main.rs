use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cafebot::bot::{self, BotContext};
use cafebot::config::{self, CafeProfile};
use cafebot::menu::Catalog;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Cafe Telegram Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Get bot token from environment
    let bot_token =
        env::var(config::BOT_TOKEN_ENV).expect("TELEGRAM_BOT_TOKEN must be set");

    // Load the menu catalog; malformed data is fatal here, not mid-conversation
    let menu_path = env::var(config::MENU_DATA_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_MENU_DATA_PATH.to_string());
    info!(path = %menu_path, "Loading menu catalog");
    let catalog = Catalog::load(&menu_path)
        .with_context(|| format!("failed to load menu catalog from {menu_path}"))?;
    info!(
        categories = catalog.categories.len(),
        "Menu catalog loaded"
    );

    let context = Arc::new(BotContext::new(catalog, CafeProfile::default()));

    // Initialize the bot
    let bot = Bot::new(bot_token);

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with the shared context
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let context = Arc::clone(&context);
            move |bot: Bot, msg: Message| {
                let context = Arc::clone(&context);
                async move { bot::message_handler(bot, msg, context).await }
            }
        }))
        .branch(Update::filter_callback_query().endpoint({
            let context = Arc::clone(&context);
            move |bot: Bot, q: CallbackQuery| {
                let context = Arc::clone(&context);
                async move { bot::callback_handler(bot, q, context).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
