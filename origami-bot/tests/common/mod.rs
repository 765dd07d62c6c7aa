//! Shared test helpers: message builder, recording [`Bot`] mock, stub quote providers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use currency_quotes::{QuoteError, QuoteFormatter, QuoteProvider};
use origami_bot::{
    Bot, BotError, Chat, ChatKind, CommandDispatcher, CommandTable, Message, Result, User,
};

pub const BOT_HANDLE: &str = "origami_bot";

pub fn make_message(content: &str, kind: ChatKind) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: Chat { id: 456, kind },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

pub fn private(content: &str) -> Message {
    make_message(content, ChatKind::Private)
}

pub fn group(content: &str) -> Message {
    make_message(content, ChatKind::Group)
}

/// One recorded `reply_to` / `send_message` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

/// Bot that records outgoing text; optionally fails every send.
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    fail: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.fail {
            return Err(BotError::Transport("chat not found".to_string()));
        }
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}

/// Returns the same closes for every request.
pub struct FixedQuotes(pub HashMap<String, f64>);

impl FixedQuotes {
    pub fn standard() -> Self {
        Self(
            [
                ("SGDMYR=X", 3.4912),
                ("SGDUSD=X", 0.7401),
                ("SGDJPY=X", 110.25),
                ("SGDHKD=X", 5.7806),
                ("SGDAUD=X", 1.1204),
            ]
            .into_iter()
            .map(|(t, v)| (t.to_string(), v))
            .collect(),
        )
    }
}

#[async_trait]
impl QuoteProvider for FixedQuotes {
    async fn latest_closes(
        &self,
        tickers: &[String],
        _period: &str,
    ) -> currency_quotes::Result<HashMap<String, f64>> {
        tickers
            .iter()
            .map(|t| {
                self.0
                    .get(t)
                    .map(|v| (t.clone(), *v))
                    .ok_or_else(|| QuoteError::MissingTicker(t.clone()))
            })
            .collect()
    }
}

/// Fails every request with a bad HTTP status.
pub struct DownQuotes;

#[async_trait]
impl QuoteProvider for DownQuotes {
    async fn latest_closes(
        &self,
        tickers: &[String],
        _period: &str,
    ) -> currency_quotes::Result<HashMap<String, f64>> {
        Err(QuoteError::Status {
            ticker: tickers.first().cloned().unwrap_or_default(),
            status: 503,
        })
    }
}

pub fn dispatcher_with(provider: impl QuoteProvider + 'static, handle: Option<&str>) -> CommandDispatcher {
    CommandDispatcher::new(
        CommandTable::standard(),
        QuoteFormatter::new(Arc::new(provider), "1d"),
        handle,
    )
}

pub fn dispatcher() -> CommandDispatcher {
    dispatcher_with(FixedQuotes::standard(), Some(BOT_HANDLE))
}
