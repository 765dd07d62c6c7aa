//! Ordered handlers for one incoming message.
//!
//! Three phases: every `before` (a `false` drops the message), `handle` until a handler ends the
//! chain with Stop or Reply, then every `after` in reverse with the final response.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::core::{Handler, HandlerResponse, Message, Result};

#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

fn handler_name(handler: &Arc<dyn Handler>) -> &'static str {
    std::any::type_name_of_val(handler.as_ref())
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.admit(message).await? {
            return Ok(HandlerResponse::Stop);
        }

        let response = self.first_final_response(message).await?;

        for h in self.handlers.iter().rev() {
            h.after(message, &response).await?;
        }
        Ok(response)
    }

    async fn admit(&self, message: &Message) -> Result<bool> {
        for h in &self.handlers {
            if !h.before(message).await? {
                debug!(handler = handler_name(h), "Message dropped in before");
                return Ok(false);
            }
        }
        Ok(true)
    }

    async fn first_final_response(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            let response = h.handle(message).await?;
            debug!(handler = handler_name(h), response = ?response, "Handled");
            if response.ends_chain() {
                return Ok(response);
            }
        }
        Ok(HandlerResponse::Continue)
    }
}
