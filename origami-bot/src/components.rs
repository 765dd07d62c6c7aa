//! Component factory: builds the Telegram client, the Bot adapter and the quote formatter from
//! config, and assembles the handler chain.

use std::sync::Arc;

use anyhow::{Context, Result};
use currency_quotes::{QuoteConfig, QuoteFormatter, YahooQuoteProvider};
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot;
use crate::dispatch::CommandDispatcher;
use crate::handlers::{CommandHandler, LoggingHandler};
use crate::telegram::TelegramBotAdapter;

pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot_adapter: Arc<dyn Bot>,
    pub quotes: QuoteFormatter,
}

/// Builds a teloxide Bot, pointing it at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url())?;
    let bot_adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let provider = YahooQuoteProvider::from_config(config.quotes())
        .context("Failed to build quote provider")?;
    let quotes = QuoteFormatter::new(Arc::new(provider), config.quotes().period());
    info!(
        quote_api_url = %config.quotes().api_url(),
        quote_period = %config.quotes().period(),
        "Quote provider ready"
    );

    Ok(BotComponents {
        teloxide_bot,
        bot_adapter,
        quotes,
    })
}

/// Builds the handler chain (logging → command).
pub fn build_handler_chain(dispatcher: CommandDispatcher, bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(dispatcher, bot)))
}
