//! Chain handlers: request logging and command replies.

mod command_handler;
mod logging_handler;

pub use command_handler::CommandHandler;
pub use logging_handler::LoggingHandler;
