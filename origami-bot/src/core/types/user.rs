//! Sender of a message.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// `@username`, else the first name, else the numeric id. Used in log lines.
    pub fn display_name(&self) -> String {
        match (&self.username, &self.first_name) {
            (Some(username), _) => format!("@{}", username),
            (None, Some(first)) => first.clone(),
            (None, None) => self.id.to_string(),
        }
    }
}
