//! Session Store Port - Interface for persisting per-session state.
//!
//! State is stored as JSON values under type-qualified property names,
//! scoped either to a conversation or to a user. `StateProperty` gives the
//! engine typed access on top of the untyped store.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

use crate::domain::foundation::{ConversationId, UserId};

/// Errors that can occur during session store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state for {key}: {reason}")]
    DeserializationFailed { key: String, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}

/// Who a stored property belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StateScope {
    Conversation(ConversationId),
    User(UserId),
}

/// Address of one stored property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub scope: StateScope,
    pub property: String,
}

impl StateKey {
    pub fn conversation(id: &ConversationId, property: impl Into<String>) -> Self {
        Self {
            scope: StateScope::Conversation(id.clone()),
            property: property.into(),
        }
    }

    pub fn user(id: &UserId, property: impl Into<String>) -> Self {
        Self {
            scope: StateScope::User(id.clone()),
            property: property.into(),
        }
    }

    /// Flat `scope/id/property` form used by the storage adapters.
    pub fn storage_key(&self) -> String {
        match &self.scope {
            StateScope::Conversation(id) => format!("conversation/{}/{}", id, self.property),
            StateScope::User(id) => format!("user/{}/{}", id, self.property),
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}

/// Port for persisting session state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load a property, `None` if it was never written.
    async fn get(&self, key: &StateKey) -> Result<Option<Value>, SessionStoreError>;

    /// Store a single property.
    async fn set(&self, key: &StateKey, value: Value) -> Result<(), SessionStoreError>;

    /// Store several properties together. Nothing is written when a value
    /// fails to serialize or stage. Adapters that publish per property
    /// (files) can leave part of the batch written if publishing fails or
    /// the process dies midway.
    async fn commit(&self, changes: Vec<(StateKey, Value)>) -> Result<(), SessionStoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Conversation,
    User,
}

/// Typed accessor for one property of session state.
pub struct StateProperty<T> {
    name: &'static str,
    scope: ScopeKind,
    _marker: PhantomData<fn() -> T>,
}

impl<T> StateProperty<T>
where
    T: Serialize + DeserializeOwned,
{
    /// A property shared by every conversation of the same user.
    pub const fn user(name: &'static str) -> Self {
        Self {
            name,
            scope: ScopeKind::User,
            _marker: PhantomData,
        }
    }

    /// A property private to one conversation.
    pub const fn conversation(name: &'static str) -> Self {
        Self {
            name,
            scope: ScopeKind::Conversation,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn key(&self, user: &UserId, conversation: &ConversationId) -> StateKey {
        match self.scope {
            ScopeKind::User => StateKey::user(user, self.name),
            ScopeKind::Conversation => StateKey::conversation(conversation, self.name),
        }
    }

    /// Loads the property, falling back to `default` when it was never stored.
    pub async fn get_or_else(
        &self,
        store: &dyn SessionStore,
        user: &UserId,
        conversation: &ConversationId,
        default: impl FnOnce() -> T + Send,
    ) -> Result<T, SessionStoreError> {
        let key = self.key(user, conversation);
        match store.get(&key).await? {
            Some(value) => serde_json::from_value(value).map_err(|e| {
                SessionStoreError::DeserializationFailed {
                    key: key.storage_key(),
                    reason: e.to_string(),
                }
            }),
            None => Ok(default()),
        }
    }

    /// Serializes `value` into a `(key, value)` pair ready for `commit`.
    pub fn entry(
        &self,
        value: &T,
        user: &UserId,
        conversation: &ConversationId,
    ) -> Result<(StateKey, Value), SessionStoreError> {
        let json = serde_json::to_value(value)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;
        Ok((self.key(user, conversation), json))
    }

    pub async fn set(
        &self,
        store: &dyn SessionStore,
        value: &T,
        user: &UserId,
        conversation: &ConversationId,
    ) -> Result<(), SessionStoreError> {
        let (key, json) = self.entry(value, user, conversation)?;
        store.set(&key, json).await
    }
}

impl<T> StateProperty<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Loads the property, or `T::default()` when it was never stored.
    pub async fn get_or_default(
        &self,
        store: &dyn SessionStore,
        user: &UserId,
        conversation: &ConversationId,
    ) -> Result<T, SessionStoreError> {
        self.get_or_else(store, user, conversation, T::default).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (UserId, ConversationId) {
        (UserId::new("u-1").unwrap(), ConversationId::new("c-1").unwrap())
    }

    #[test]
    fn storage_key_includes_scope_and_property() {
        let (user, conversation) = ids();
        assert_eq!(
            StateKey::user(&user, "CustomerProfile").storage_key(),
            "user/u-1/CustomerProfile"
        );
        assert_eq!(
            StateKey::conversation(&conversation, "ConversationProgress").to_string(),
            "conversation/c-1/ConversationProgress"
        );
    }

    #[test]
    fn property_key_follows_declared_scope() {
        let (user, conversation) = ids();
        let by_user: StateProperty<u32> = StateProperty::user("Counter");
        let by_conversation: StateProperty<u32> = StateProperty::conversation("Counter");

        assert_eq!(by_user.key(&user, &conversation).scope, StateScope::User(user.clone()));
        assert_eq!(
            by_conversation.key(&user, &conversation).scope,
            StateScope::Conversation(conversation.clone())
        );
    }

    #[test]
    fn entry_serializes_value() {
        let (user, conversation) = ids();
        let prop: StateProperty<Vec<u8>> = StateProperty::user("Bytes");
        let (key, value) = prop.entry(&vec![1, 2], &user, &conversation).unwrap();
        assert_eq!(key.property, "Bytes");
        assert_eq!(value, serde_json::json!([1, 2]));
    }

    #[test]
    fn deserialization_error_names_key() {
        let err = SessionStoreError::DeserializationFailed {
            key: "user/u-1/Cart".into(),
            reason: "expected a sequence".into(),
        };
        assert!(err.to_string().contains("user/u-1/Cart"));
    }
}
