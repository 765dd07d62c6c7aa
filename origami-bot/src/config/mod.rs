//! Bot configuration: BaseConfig (Telegram + log) + ServiceConfig (health + shutdown) +
//! EnvQuoteConfig (quote API).

mod base;
mod bot_config;
mod service;


pub use base::{BaseConfig, DEFAULT_LOG_FILE};
pub use bot_config::BotConfig;
pub use service::{ServiceConfig, DEFAULT_HEALTH_PORT, DEFAULT_SHUTDOWN_GRACE_SECS};
