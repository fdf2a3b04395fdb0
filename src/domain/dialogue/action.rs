//! Reply actions emitted by a turn.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Card;

/// How multiple cards in one reply are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentLayout {
    List,
    Carousel,
}

/// One outgoing activity. Order within a turn is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReplyAction {
    Text { text: String },
    Typing,
    Delay { ms: u64 },
    Cards {
        layout: AttachmentLayout,
        cards: Vec<Card>,
    },
}

impl ReplyAction {
    pub fn text(text: impl Into<String>) -> Self {
        ReplyAction::Text { text: text.into() }
    }

    pub fn delay(duration: Duration) -> Self {
        ReplyAction::Delay {
            ms: duration.as_millis() as u64,
        }
    }

    pub fn card(card: Card) -> Self {
        ReplyAction::Cards {
            layout: AttachmentLayout::List,
            cards: vec![card],
        }
    }

    pub fn carousel(cards: Vec<Card>) -> Self {
        ReplyAction::Cards {
            layout: AttachmentLayout::Carousel,
            cards,
        }
    }

    /// Returns the text if this is a plain text reply.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ReplyAction::Text { text } => Some(text),
            _ => None,
        }
    }
}
