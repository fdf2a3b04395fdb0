//! In-Memory Session Store Adapter
//!
//! Keeps session properties in a map behind an async lock.
//! Useful for testing and development.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{SessionStore, SessionStoreError, StateKey};

/// In-memory storage for session state
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<StateKey, Value>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored properties
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Copy of everything stored, for assertions in tests
    pub async fn snapshot(&self) -> HashMap<StateKey, Value> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &StateKey) -> Result<Option<Value>, SessionStoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &StateKey, value: Value) -> Result<(), SessionStoreError> {
        self.entries.write().await.insert(key.clone(), value);
        Ok(())
    }

    async fn commit(&self, changes: Vec<(StateKey, Value)>) -> Result<(), SessionStoreError> {
        // One write lock for the whole batch so readers never see half of it.
        let mut entries = self.entries.write().await;
        entries.extend(changes);
        Ok(())
    }
}
