//! BotConfig: BaseConfig + ServiceConfig + EnvQuoteConfig. Use load() for env-based loading.

use anyhow::Result;
use currency_quotes::EnvQuoteConfig;

use super::{BaseConfig, ServiceConfig};

pub struct BotConfig {
    pub base: BaseConfig,
    pub service: ServiceConfig,
    pub quotes: EnvQuoteConfig,
}

impl BotConfig {
    /// Load full config from environment variables. `token` overrides BOT_TOKEN and
    /// `health_port` overrides HEALTH_PORT when provided.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>, health_port: Option<u16>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let service = ServiceConfig::load(health_port)?;
        let quotes = EnvQuoteConfig::from_env()?;
        Ok(Self {
            base,
            service,
            quotes,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.quotes.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }
    pub fn quotes(&self) -> &EnvQuoteConfig {
        &self.quotes
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn bot_username(&self) -> Option<&str> {
        self.base.bot_username.as_deref()
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn health_port(&self) -> u16 {
        self.service.health_port
    }
}
