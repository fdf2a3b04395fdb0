//! Reply Sink Port - Delivers reply actions back to the channel.

use async_trait::async_trait;

use crate::domain::dialogue::{Activity, ReplyAction};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeliveryError {
    #[error("channel rejected reply: {0}")]
    Channel(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for sending replies in order.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Sends `actions`, in order, as replies to `activity`. Never retried.
    async fn send(&self, activity: &Activity, actions: &[ReplyAction]) -> Result<(), DeliveryError>;
}
