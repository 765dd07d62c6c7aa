//! Errors raised while delivering replies.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Telegram (or another transport) rejected or failed the request.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Failed to reply in chat {chat_id} to message {message_id}: {reason}")]
    ReplyFailed {
        chat_id: i64,
        message_id: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BotError>;
