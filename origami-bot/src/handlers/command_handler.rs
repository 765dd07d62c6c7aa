//! Sends the dispatcher's reply through the [`Bot`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};
use crate::dispatch::CommandDispatcher;

/// Ends the chain with `Reply` when the dispatcher answers, `Ignore` otherwise.
pub struct CommandHandler {
    dispatcher: CommandDispatcher,
    bot: Arc<dyn Bot>,
}

impl CommandHandler {
    pub fn new(dispatcher: CommandDispatcher, bot: Arc<dyn Bot>) -> Self {
        Self { dispatcher, bot }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(reply) = self.dispatcher.dispatch(message).await else {
            return Ok(HandlerResponse::Ignore);
        };

        self.bot
            .reply_to(message, &reply.text)
            .await
            .map_err(|e| HandlerError::ReplyFailed {
                chat_id: message.chat.id,
                message_id: message.id.clone(),
                reason: e.to_string(),
            })?;

        info!(reply_kind = %reply.kind, reply_len = reply.text.len(), "Reply sent");
        Ok(HandlerResponse::Reply(reply.text))
    }
}
