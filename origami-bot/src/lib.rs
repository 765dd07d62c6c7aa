//! # Origami bot
//!
//! Telegram bot that converts imperial units to metric and quotes SGD exchange rates, with a
//! health-check endpoint and graceful shutdown.
//!
//! - [`core`]: transport-agnostic Message, Bot, Handler, errors, logging.
//! - [`chain`]: HandlerChain (before → handle → after).
//! - [`dispatch`]: CommandTable and CommandDispatcher (commands, arguments, free text).
//! - [`telegram`]: teloxide adapters and the polling service.
//! - [`health`] and [`lifecycle`]: health server and the service lifecycle.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod handlers;
pub mod health;
pub mod lifecycle;
pub mod mention;
pub mod runner;
pub mod telegram;

pub use crate::cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, Bot, BotError, Chat, ChatKind, Handler, HandlerError, HandlerResponse, Message,
    Result, ToCoreMessage, ToCoreUser, User,
};

pub use crate::chain::HandlerChain;

pub use crate::dispatch::{
    parse_command, CommandAction, CommandDispatcher, CommandTable, ConversionRequest, Reply,
    ReplyKind,
};

pub use crate::telegram::{
    register_commands, resolve_bot_handle, PollingService, TelegramBotAdapter,
    TelegramMessageWrapper, TelegramUserWrapper,
};

pub use crate::config::{BaseConfig, BotConfig, ServiceConfig};
pub use crate::health::HealthServer;
pub use crate::lifecycle::{shutdown_signal, Service, ServiceLifecycle, ShutdownHandle};
pub use crate::runner::run_bot;

pub use crate::components::{build_bot_components, build_handler_chain, BotComponents};
pub use crate::handlers::{CommandHandler, LoggingHandler};
