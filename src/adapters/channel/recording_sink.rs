//! Recording reply sink for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::dialogue::{Activity, ReplyAction};
use crate::ports::{DeliveryError, ReplySink};

/// One `send` call as the sink received it.
#[derive(Debug, Clone, PartialEq)]
pub struct SentReply {
    pub conversation_id: String,
    pub actions: Vec<ReplyAction>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    sent: Arc<Mutex<Vec<SentReply>>>,
    reject_with: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every delivery fail after recording it.
    pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
        self.reject_with = Some(reason.into());
        self
    }

    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Every action across every send, flattened in delivery order.
    pub fn actions(&self) -> Vec<ReplyAction> {
        self.sent().into_iter().flat_map(|s| s.actions).collect()
    }

    /// Just the text replies.
    pub fn texts(&self) -> Vec<String> {
        self.actions()
            .iter()
            .filter_map(|a| a.as_text().map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send(&self, activity: &Activity, actions: &[ReplyAction]) -> Result<(), DeliveryError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentReply {
                conversation_id: activity.conversation.to_string(),
                actions: actions.to_vec(),
            });
        }

        match &self.reject_with {
            Some(reason) => Err(DeliveryError::Channel(reason.clone())),
            None => Ok(()),
        }
    }
}
