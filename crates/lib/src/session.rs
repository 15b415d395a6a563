//! Per-sender menu position.
//!
//! Sessions are keyed by normalized sender and hold the current `MenuState`. An absent entry
//! means the sender is at the main menu. Entries live for the process lifetime.

use crate::channels::SenderId;
use crate::menu::MenuState;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// Storage for each sender's menu state. Injected into the bot so backings can be swapped.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stored state, or `MenuState::MainMenu` when the sender has none.
    async fn get(&self, sender: &SenderId) -> MenuState;
    /// Overwrite the sender's state unconditionally.
    async fn set(&self, sender: &SenderId, state: MenuState);
}

/// In-memory store (volatile; lost on restart).
pub struct MemorySessionStore {
    inner: Arc<RwLock<HashMap<SenderId, MenuState>>>,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Raw entry without the main-menu default (None if the sender was never stored).
    pub async fn peek(&self, sender: &SenderId) -> Option<MenuState> {
        self.inner.read().await.get(sender).copied()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, sender: &SenderId) -> MenuState {
        self.peek(sender).await.unwrap_or_default()
    }

    async fn set(&self, sender: &SenderId, state: MenuState) {
        self.inner.write().await.insert(sender.clone(), state);
    }
}

/// One async mutex per sender, so two webhook deliveries for the same number run one after the other.
///
/// Locks are only taken for authorized senders. Idle entries (no holder, no waiter) are pruned
/// whenever a new sender is added, so the map tracks senders with a turn in flight.
pub struct SenderLocks {
    inner: RwLock<HashMap<SenderId, Arc<Mutex<()>>>>,
}

impl Default for SenderLocks {
    fn default() -> Self {
        Self::new()
    }
}

impl SenderLocks {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Wait for and hold the sender's lock until the guard is dropped.
    pub async fn acquire(&self, sender: &SenderId) -> OwnedMutexGuard<()> {
        let existing = self.inner.read().await.get(sender).cloned();
        let lock = match existing {
            Some(lock) => lock,
            None => {
                let mut map = self.inner.write().await;
                map.retain(|key, lock| key == sender || Arc::strong_count(lock) > 1);
                map.entry(sender.clone())
                    .or_insert_with(|| Arc::new(Mutex::new(())))
                    .clone()
            }
        };
        lock.lock_owned().await
    }
}
