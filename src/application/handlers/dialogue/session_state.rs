//! Loading and committing the session state a turn works on.
//!
//! The customer profile and cart follow the user across conversations;
//! progress flags belong to one conversation. Only properties that changed
//! during the turn are written back, all in one commit.

use crate::domain::catalog::CustomerProfile;
use crate::domain::foundation::{ConversationId, UserId};
use crate::domain::session::{Cart, ConversationProgress, SessionState};
use crate::ports::{SessionStore, SessionStoreError, StateProperty};

pub const CUSTOMER_PROFILE: StateProperty<CustomerProfile> = StateProperty::user("CustomerProfile");

pub const SHOPPING_CART: StateProperty<Cart> = StateProperty::user("ShoppingCart");

pub const CONVERSATION_PROGRESS: StateProperty<ConversationProgress> =
    StateProperty::conversation("ConversationProgress");

/// Reads every property, defaulting the ones never stored.
pub async fn load(
    store: &dyn SessionStore,
    user: &UserId,
    conversation: &ConversationId,
) -> Result<SessionState, SessionStoreError> {
    Ok(SessionState {
        customer: CUSTOMER_PROFILE.get_or_default(store, user, conversation).await?,
        cart: SHOPPING_CART.get_or_default(store, user, conversation).await?,
        progress: CONVERSATION_PROGRESS
            .get_or_default(store, user, conversation)
            .await?,
    })
}

/// Writes the properties that differ from `before`.
///
/// Returns `false` without touching the store when nothing changed.
pub async fn commit(
    store: &dyn SessionStore,
    user: &UserId,
    conversation: &ConversationId,
    before: &SessionState,
    after: &SessionState,
) -> Result<bool, SessionStoreError> {
    let mut changes = Vec::new();
    if before.customer != after.customer {
        changes.push(CUSTOMER_PROFILE.entry(&after.customer, user, conversation)?);
    }
    if before.cart != after.cart {
        changes.push(SHOPPING_CART.entry(&after.cart, user, conversation)?);
    }
    if before.progress != after.progress {
        changes.push(CONVERSATION_PROGRESS.entry(&after.progress, user, conversation)?);
    }

    if changes.is_empty() {
        return Ok(false);
    }
    store.commit(changes).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;

    fn ids() -> (UserId, ConversationId) {
        (UserId::new("user").unwrap(), ConversationId::new("conv").unwrap())
    }

    #[tokio::test]
    async fn empty_store_loads_default_state() {
        let store = InMemorySessionStore::new();
        let (user, conversation) = ids();

        let state = load(&store, &user, &conversation).await.unwrap();

        assert_eq!(state, SessionState::default());
    }

    #[tokio::test]
    async fn unchanged_state_is_not_written() {
        let store = InMemorySessionStore::new();
        let (user, conversation) = ids();
        let state = SessionState::default();

        let written = commit(&store, &user, &conversation, &state, &state).await.unwrap();

        assert!(!written);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn only_changed_properties_are_written() {
        let store = InMemorySessionStore::new();
        let (user, conversation) = ids();
        let before = SessionState::default();
        let mut after = before.clone();
        after.progress.greeted = true;

        commit(&store, &user, &conversation, &before, &after).await.unwrap();

        assert_eq!(store.len().await, 1);
        let reloaded = load(&store, &user, &conversation).await.unwrap();
        assert!(reloaded.progress.greeted);
    }

    #[tokio::test]
    async fn profile_is_shared_across_conversations() {
        let store = InMemorySessionStore::new();
        let (user, conversation) = ids();
        let other = ConversationId::new("other").unwrap();
        let before = SessionState::default();
        let mut after = before.clone();
        after.customer.customer_name = "Ana".to_string();
        after.progress.greeted = true;

        commit(&store, &user, &conversation, &before, &after).await.unwrap();
        let elsewhere = load(&store, &user, &other).await.unwrap();

        assert_eq!(elsewhere.customer.customer_name, "Ana");
        assert!(!elsewhere.progress.greeted);
    }
}
