//! Outbound side of the transport.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, Message};

/// Sends text to a chat. Implemented by [`crate::telegram::TelegramBotAdapter`]; tests substitute
/// a recording mock.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
}
