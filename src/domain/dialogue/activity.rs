//! Incoming chat activities.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ConversationId, Timestamp, UserId};

/// The activity type tag the channel sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    Message,
    ConversationUpdate,
    Other(String),
}

impl ActivityKind {
    pub fn from_wire(kind: &str) -> Self {
        match kind {
            "message" => ActivityKind::Message,
            "conversationUpdate" => ActivityKind::ConversationUpdate,
            other => ActivityKind::Other(other.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            ActivityKind::Message => "message",
            ActivityKind::ConversationUpdate => "conversationUpdate",
            ActivityKind::Other(raw) => raw,
        }
    }
}

impl From<String> for ActivityKind {
    fn from(value: String) -> Self {
        ActivityKind::from_wire(&value)
    }
}

impl From<ActivityKind> for String {
    fn from(value: ActivityKind) -> Self {
        value.as_wire().to_string()
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// One activity received from the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub text: Option<String>,
    pub from: UserId,
    pub conversation: ConversationId,
    pub channel_id: String,
    pub timestamp: Option<Timestamp>,
}

impl Activity {
    pub fn new(kind: ActivityKind, from: UserId, conversation: ConversationId) -> Self {
        Self {
            kind,
            text: None,
            from,
            conversation,
            channel_id: "console".to_string(),
            timestamp: None,
        }
    }

    /// A user utterance.
    pub fn message(from: UserId, conversation: ConversationId, text: impl Into<String>) -> Self {
        let mut activity = Self::new(ActivityKind::Message, from, conversation);
        activity.text = Some(text.into());
        activity.timestamp = Some(Timestamp::now());
        activity
    }

    /// Members joined or left the conversation.
    pub fn conversation_update(from: UserId, conversation: ConversationId) -> Self {
        Self::new(ActivityKind::ConversationUpdate, from, conversation)
    }

    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The message text, or an empty string for activities without one.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}
