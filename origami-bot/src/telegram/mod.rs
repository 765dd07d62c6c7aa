//! Telegram layer: teloxide ↔ core adapters, Bot implementation, polling service.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{chat_kind, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::{register_commands, resolve_bot_handle, PollingService};
