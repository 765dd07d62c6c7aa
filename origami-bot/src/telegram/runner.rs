//! Long-polling service: teloxide dispatcher feeding core messages to the [`HandlerChain`].
//! Updates from one chat are handled in order; different chats run concurrently.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tokio::sync::broadcast;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use crate::dispatch::CommandTable;
use crate::mention::normalize_handle;

const SHUTDOWN_RETRY: Duration = Duration::from_millis(50);

/// Returns the configured handle if set, otherwise asks Telegram via `getMe`.
/// `None` when neither yields a username; free text in groups is then ignored.
#[instrument(skip(bot))]
pub async fn resolve_bot_handle(bot: &teloxide::Bot, configured: Option<&str>) -> Option<String> {
    if let Some(handle) = configured.and_then(normalize_handle) {
        info!(handle = %handle, "Using configured bot handle");
        return Some(handle);
    }
    match bot.get_me().await {
        Ok(me) => {
            let handle = me.user.username.clone();
            match &handle {
                Some(h) => info!(handle = %h, "Bot handle resolved via getMe"),
                None => warn!("Bot has no username; group free text will be ignored"),
            }
            handle
        }
        Err(e) => {
            warn!(error = %e, "getMe failed; group free text will be ignored");
            None
        }
    }
}

/// Publishes the command menu. Failure is logged and reported as `false`.
#[instrument(skip(bot))]
pub async fn register_commands(bot: &teloxide::Bot) -> bool {
    let commands: Vec<BotCommand> = CommandTable::menu()
        .into_iter()
        .map(|(command, description)| BotCommand::new(command, description))
        .collect();
    let count = commands.len();
    match bot.set_my_commands(commands).await {
        Ok(_) => {
            info!(count = count, "Command menu registered");
            true
        }
        Err(e) => {
            warn!(error = %e, "Failed to register command menu");
            false
        }
    }
}

async fn handle_update(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    if let Err(e) = chain.handle(&core_msg).await {
        error!(
            error = %e,
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_id = %core_msg.id,
            "Handler chain failed"
        );
    }
    Ok(())
}

/// Polls Telegram for messages until shutdown.
pub struct PollingService {
    bot: teloxide::Bot,
    chain: HandlerChain,
}

impl PollingService {
    pub fn new(bot: teloxide::Bot, chain: HandlerChain) -> Self {
        Self { bot, chain }
    }
}

#[async_trait]
impl crate::lifecycle::Service for PollingService {
    fn name(&self) -> &'static str {
        "telegram-polling"
    }

    async fn run(self: Box<Self>, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        let handler = Update::filter_message().endpoint(handle_update);

        let mut dispatcher = Dispatcher::builder(self.bot, handler)
            .dependencies(dptree::deps![self.chain])
            .default_handler(|upd| async move {
                debug!(update_id = ?upd.id, "Unhandled update");
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "Error in update handler",
            ))
            .build();

        let token = dispatcher.shutdown_token();
        let stopper = tokio::spawn(async move {
            let _ = shutdown.recv().await;
            info!("Stopping update polling");
            loop {
                match token.shutdown() {
                    Ok(done) => {
                        done.await;
                        break;
                    }
                    // Dispatcher not started yet
                    Err(_) => tokio::time::sleep(SHUTDOWN_RETRY).await,
                }
            }
        });

        info!("Polling for updates");
        dispatcher.dispatch().await;
        stopper.abort();

        info!("Update polling stopped");
        Ok(())
    }
}
