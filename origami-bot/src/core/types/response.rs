//! What a handler decided to do with a message.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not handled here; next handler runs.
    Continue,
    /// End of chain without a reply.
    Stop,
    /// Deliberately left unanswered (e.g. group text without a mention); next handler runs.
    Ignore,
    /// End of chain; this text was sent to the chat.
    Reply(String),
}

impl HandlerResponse {
    /// Stop and Reply end the handle phase.
    pub fn ends_chain(&self) -> bool {
        matches!(self, HandlerResponse::Stop | HandlerResponse::Reply(_))
    }

    pub fn reply_text(&self) -> Option<&str> {
        match self {
            HandlerResponse::Reply(text) => Some(text),
            _ => None,
        }
    }
}
