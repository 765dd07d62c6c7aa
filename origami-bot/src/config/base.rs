//! Base config: Telegram Bot connection and logging. Loaded from env.

use anyhow::Result;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/origami-bot.log";

#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN, falling back to TOKEN
    pub bot_token: String,
    /// BOT_USERNAME; resolved via getMe when unset
    pub bot_username: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN")
                .or_else(|_| env::var("TOKEN"))
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN (or TOKEN) not set"))?,
        };
        let bot_username = env::var("BOT_USERNAME")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            bot_username,
            telegram_api_url,
            log_file,
        })
    }

    /// Token must be non-blank; telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
