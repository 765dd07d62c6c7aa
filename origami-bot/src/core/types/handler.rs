//! Handler trait plus the conversions from transport types into core types.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};
use crate::core::error::Result;

pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One link of the [`crate::chain::HandlerChain`]. Every phase has a no-op default.
#[async_trait]
pub trait Handler: Send + Sync {
    /// `false` drops the message before any handler sees it.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    /// Sees the final response, in reverse handler order.
    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}
