//! Main entry: validate config, init logging, bind the health socket, build the Telegram client,
//! then run both services until shutdown.

use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::dispatch::{CommandDispatcher, CommandTable};
use crate::health::HealthServer;
use crate::lifecycle::{shutdown_signal, ServiceLifecycle};
use crate::telegram::{register_commands, resolve_bot_handle, PollingService};

#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file()))?;

    info!(
        health_port = config.health_port(),
        shutdown_grace_secs = config.service().shutdown_grace_secs,
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let health = HealthServer::bind_port(config.health_port())?;

    let handle = resolve_bot_handle(&components.teloxide_bot, config.bot_username()).await;
    register_commands(&components.teloxide_bot).await;

    let dispatcher = CommandDispatcher::new(
        CommandTable::standard(),
        components.quotes.clone(),
        handle.as_deref(),
    );
    let chain = build_handler_chain(dispatcher, components.bot_adapter.clone());

    let lifecycle = ServiceLifecycle::new(config.service().shutdown_grace())
        .with_service(health)
        .with_service(PollingService::new(components.teloxide_bot.clone(), chain));

    info!("Bot started successfully");

    lifecycle.run(shutdown_signal()).await
}
