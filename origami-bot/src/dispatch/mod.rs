//! Command routing: command table, argument extraction, free-text replies.

mod command_table;
mod dispatcher;
pub mod text;

pub use command_table::{CommandAction, CommandTable, ConvertFn};
pub use dispatcher::{parse_command, CommandDispatcher, ConversionRequest, Reply, ReplyKind};
