//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "origami-bot")]
#[command(about = "Telegram bot converting imperial units to metric", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the bot and the health-check server (config from env; flags override).
    Run {
        /// Overrides BOT_TOKEN.
        #[arg(short, long)]
        token: Option<String>,
        /// Overrides HEALTH_PORT.
        #[arg(long)]
        health_port: Option<u16>,
    },
}

/// Load BotConfig from environment, applying CLI overrides.
pub fn load_config(token: Option<String>, health_port: Option<u16>) -> Result<BotConfig> {
    BotConfig::load(token, health_port)
}
