//! User directory: which phone numbers may use the bot, and the property each belongs to.
//!
//! Backed by Postgres in production (`PostgresDirectory`) or by a static list from config
//! (`StaticDirectory`) for local runs and tests.

mod postgres;

pub use postgres::PostgresDirectory;

use crate::channels::SenderId;
use crate::config::StaticUser;
use async_trait::async_trait;
use std::collections::HashMap;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub phone: String,
    /// Account/property the number belongs to; None when the record has no name.
    pub property_name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory query failed: {0}")]
    Query(#[from] sqlx::Error),
    #[error("directory lookup timed out after {0}s")]
    Timeout(u64),
}

/// Lookup keyed by normalized phone number.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Entry for the number, or None if it is not registered.
    async fn lookup(&self, phone: &SenderId) -> Result<Option<DirectoryEntry>, DirectoryError>;
}

/// In-memory directory.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    users: HashMap<SenderId, DirectoryEntry>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: &[StaticUser]) -> Self {
        let mut dir = Self::new();
        for u in users {
            dir.insert(&u.phone, u.property_name.clone());
        }
        dir
    }

    /// Register a number (any form `SenderId::normalize` accepts).
    pub fn insert(&mut self, phone: &str, property_name: Option<String>) {
        let id = SenderId::normalize(phone);
        if id.is_empty() {
            log::warn!("static directory: skipping user with empty phone");
            return;
        }
        let entry = DirectoryEntry {
            phone: id.as_str().to_string(),
            property_name,
        };
        self.users.insert(id, entry);
    }

    pub fn with_user(mut self, phone: &str, property_name: Option<&str>) -> Self {
        self.insert(phone, property_name.map(str::to_string));
        self
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for StaticDirectory {
    async fn lookup(&self, phone: &SenderId) -> Result<Option<DirectoryEntry>, DirectoryError> {
        Ok(self.users.get(phone).cloned())
    }
}
