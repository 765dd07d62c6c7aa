//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Kind of conversation a message arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

impl ChatKind {
    /// Group and supergroup chats; free text there must mention the bot.
    pub fn is_multi_party(self) -> bool {
        matches!(self, ChatKind::Group | ChatKind::Supergroup)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChatKind::Private => "private",
            ChatKind::Group => "group",
            ChatKind::Supergroup => "supergroup",
            ChatKind::Channel => "channel",
        }
    }
}

/// Chat identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_party_kinds() {
        assert!(ChatKind::Group.is_multi_party());
        assert!(ChatKind::Supergroup.is_multi_party());
        assert!(!ChatKind::Private.is_multi_party());
        assert!(!ChatKind::Channel.is_multi_party());
    }
}
