//! Core types and traits: Handler, Bot, Message, HandlerResponse, error, logger.
//! Transport-agnostic; Telegram specifics live in [`crate::telegram`].

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Chat, ChatKind, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
