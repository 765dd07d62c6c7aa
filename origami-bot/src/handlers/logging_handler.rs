//! Logs each message in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            from = %message.user.display_name(),
            chat_id = message.chat.id,
            chat_kind = message.chat.kind.as_str(),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response.reply_text() {
            Some(text) => info!(
                chat_id = message.chat.id,
                message_id = %message.id,
                reply = %text,
                "Replied"
            ),
            None => debug!(
                chat_id = message.chat.id,
                message_id = %message.id,
                response = ?response,
                "No reply"
            ),
        }
        Ok(())
    }
}
