//! @-mention helpers for multi-party chats.

/// Strips surrounding whitespace and one leading `@` from a configured or resolved bot handle.
/// Returns `None` for a blank handle.
pub fn normalize_handle(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let handle = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();
    if handle.is_empty() {
        None
    } else {
        Some(handle.to_string())
    }
}

/// Returns true if `text` contains `@<bot_handle>`.
#[inline]
pub fn is_bot_mentioned(text: &str, bot_handle: &str) -> bool {
    text.contains(&format!("@{}", bot_handle))
}

/// Removes every `@<bot_handle>` from `text` and trims the result.
#[inline]
pub fn strip_mention(text: &str, bot_handle: &str) -> String {
    text.replace(&format!("@{}", bot_handle), "")
        .trim()
        .to_string()
}
