use std::{collections::HashSet, sync::Arc};

use tokio::sync::RwLock;

/// A slice of the log starting at some offset, read under a single lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub messages: Vec<String>,
    pub next: usize,
}

/// Append-only list of `"<user>: <text>"` lines, shared by every handler.
#[derive(Debug, Clone, Default)]
pub struct MessageLog(Arc<RwLock<Vec<String>>>);

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index the line was stored at.
    pub async fn append(&self, line: String) -> usize {
        let mut lines = self.0.write().await;
        lines.push(line);
        lines.len() - 1
    }

    /// Everything from `offset` on. An offset past the end gives an empty page.
    pub async fn since(&self, offset: usize) -> Page {
        let lines = self.0.read().await;
        let start = offset.min(lines.len());
        Page {
            messages: lines[start..].to_vec(),
            next: lines.len(),
        }
    }

    pub async fn len(&self) -> usize {
        self.0.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.0.read().await.is_empty()
    }
}

/// Usernames seen so far. Nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct ActiveUsers(Arc<RwLock<HashSet<String>>>);

impl ActiveUsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the name wasn't known yet.
    pub async fn insert(&self, user: &str) -> bool {
        let mut users = self.0.write().await;
        if users.contains(user) {
            return false;
        }
        users.insert(user.to_owned())
    }

    pub async fn contains(&self, user: &str) -> bool {
        self.0.read().await.contains(user)
    }

    pub async fn snapshot(&self) -> Vec<String> {
        self.0.read().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.0.read().await.len()
    }
}
