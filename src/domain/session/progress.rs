//! Conversation-scoped progress flags.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Where the conversation stands between turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationProgress {
    /// The assistant asked for the user's name and is waiting for it.
    pub awaiting_name: bool,
    pub last_timestamp: Option<Timestamp>,
    pub last_channel: Option<String>,
    /// The greeting was sent for this conversation.
    #[serde(default)]
    pub greeted: bool,
}

impl ConversationProgress {
    pub fn record_message(&mut self, timestamp: Timestamp, channel: impl Into<String>) {
        self.last_timestamp = Some(timestamp);
        self.last_channel = Some(channel.into());
    }
}
