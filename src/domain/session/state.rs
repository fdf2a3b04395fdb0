//! Per-session state snapshot.

use serde::{Deserialize, Serialize};

use super::{Cart, ConversationProgress};
use crate::domain::catalog::CustomerProfile;

/// Everything the engine reads and writes during a turn.
///
/// `customer` and `cart` are user-scoped, `progress` is
/// conversation-scoped; the store adapter decides where each lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub customer: CustomerProfile,
    pub cart: Cart,
    pub progress: ConversationProgress,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a user-supplied name and clears the pending prompt.
    pub fn accept_name(&mut self, name: impl Into<String>) {
        self.customer.customer_name = name.into();
        self.progress.awaiting_name = false;
    }

    /// Marks that the assistant asked for the user's name.
    pub fn prompt_for_name(&mut self) {
        self.progress.awaiting_name = true;
    }
}
