//! Routes a core [`Message`] to an optional [`Reply`].

use std::fmt;

use currency_quotes::QuoteFormatter;
use tracing::{debug, instrument};

use super::command_table::{CommandAction, CommandTable};
use super::text::free_text_reply;
use crate::core::Message;
use crate::mention::{is_bot_mentioned, normalize_handle, strip_mention};

/// One parsed `/command` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub command_name: String,
    /// Text after the command word, trimmed; `None` when absent or blank.
    pub raw_argument: Option<String>,
    /// `handle` from a `/command@handle` suffix.
    pub addressee: Option<String>,
}

/// Parses `/name[@handle] [argument]`. Returns `None` for text that is not a command.
pub fn parse_command(text: &str) -> Option<ConversionRequest> {
    let rest = text.strip_prefix('/')?;
    let (word, argument) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], Some(rest[idx..].trim())),
        None => (rest, None),
    };
    let (name, addressee) = match word.split_once('@') {
        Some((name, handle)) => (name, Some(handle.to_string())),
        None => (word, None),
    };
    if name.is_empty() {
        return None;
    }
    Some(ConversionRequest {
        command_name: name.to_string(),
        raw_argument: argument.filter(|a| !a.is_empty()).map(str::to_string),
        addressee,
    })
}

/// Which path produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Info,
    Converted,
    Invalid,
    MissingArgument,
    Quotes,
    QuotesUnavailable,
    Chat,
}

impl ReplyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplyKind::Info => "info",
            ReplyKind::Converted => "converted",
            ReplyKind::Invalid => "invalid",
            ReplyKind::MissingArgument => "missing_argument",
            ReplyKind::Quotes => "quotes",
            ReplyKind::QuotesUnavailable => "quotes_unavailable",
            ReplyKind::Chat => "chat",
        }
    }
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reply text plus the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
}

impl Reply {
    pub fn new(text: impl Into<String>, kind: ReplyKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Stateless router over an immutable [`CommandTable`], the quote formatter and the bot handle.
#[derive(Clone)]
pub struct CommandDispatcher {
    table: CommandTable,
    quotes: QuoteFormatter,
    bot_handle: Option<String>,
}

impl CommandDispatcher {
    /// `bot_handle` may carry a leading `@`; `None` means free text in groups is never answered.
    pub fn new(table: CommandTable, quotes: QuoteFormatter, bot_handle: Option<&str>) -> Self {
        Self {
            table,
            quotes,
            bot_handle: bot_handle.and_then(normalize_handle),
        }
    }

    pub fn bot_handle(&self) -> Option<&str> {
        self.bot_handle.as_deref()
    }

    /// Returns the reply for `message`, or `None` when the message must be ignored.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn dispatch(&self, message: &Message) -> Option<Reply> {
        if message.content.trim().is_empty() {
            return None;
        }
        match parse_command(&message.content) {
            Some(request) => {
                if !self.is_addressed_to_us(&request) {
                    debug!(
                        command = %request.command_name,
                        addressee = ?request.addressee,
                        "Command for another bot ignored"
                    );
                    return None;
                }
                self.run_command(&request).await
            }
            None => self.free_text(message),
        }
    }

    /// Runs a parsed command. Unknown commands yield `None`.
    pub async fn run_command(&self, request: &ConversionRequest) -> Option<Reply> {
        let Some(action) = self.table.get(&request.command_name) else {
            debug!(command = %request.command_name, "Unknown command ignored");
            return None;
        };

        let reply = match action {
            CommandAction::Text(text) => Reply::new(text, ReplyKind::Info),
            CommandAction::Convert { convert, usage } => match request.raw_argument.as_deref() {
                None => Reply::new(usage, ReplyKind::MissingArgument),
                Some(argument) => match convert(argument) {
                    Ok(text) => Reply::new(text, ReplyKind::Converted),
                    Err(e) => Reply::new(e.to_string(), ReplyKind::Invalid),
                },
            },
            CommandAction::Currencies => {
                let set = self.quotes.fetch().await;
                let kind = if set.is_available() {
                    ReplyKind::Quotes
                } else {
                    ReplyKind::QuotesUnavailable
                };
                Reply::new(set.render(), kind)
            }
        };
        debug!(command = %request.command_name, reply_kind = %reply.kind, "Command dispatched");
        Some(reply)
    }

    fn is_addressed_to_us(&self, request: &ConversionRequest) -> bool {
        match (&request.addressee, &self.bot_handle) {
            (Some(to), Some(me)) => to.eq_ignore_ascii_case(me),
            _ => true,
        }
    }

    fn free_text(&self, message: &Message) -> Option<Reply> {
        let text = message.content.trim();
        let input = if message.chat.kind.is_multi_party() {
            let handle = self.bot_handle.as_deref()?;
            if !is_bot_mentioned(text, handle) {
                return None;
            }
            strip_mention(text, handle)
        } else {
            text.to_string()
        };
        Some(Reply::new(free_text_reply(&input), ReplyKind::Chat))
    }
}
