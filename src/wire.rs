//! JSON bodies shared by the server handlers and [`crate::client::RelayClient`].

use serde::{Deserialize, Serialize};

use crate::chat::store::Page;

/// Body of `GET /messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<String>,
    /// Offset to send as `since` on the next poll.
    pub next: usize,
}

/// Body of `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<String>,
}

impl From<Page> for MessagesResponse {
    fn from(Page { messages, next }: Page) -> Self {
        Self { messages, next }
    }
}
