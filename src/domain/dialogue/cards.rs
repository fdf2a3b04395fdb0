//! Card payloads attached to replies.
//!
//! Field names follow the bot framework's card schema so a channel adapter
//! can serialize them straight onto the wire.

use serde::{Deserialize, Serialize};

/// An image shown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImage {
    pub url: String,
}

impl CardImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Inline image from a base64 GIF thumbnail.
    pub fn inline_gif(base64: &str) -> Self {
        Self::new(format!("data:image/gif;base64,{}", base64))
    }
}

/// How a card button behaves when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Sends `value` back to the assistant as if the user typed it.
    #[serde(rename = "imBack")]
    ImBack,
    #[serde(rename = "openUrl")]
    OpenUrl,
}

/// A card button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub title: String,
    pub value: String,
}

impl CardAction {
    pub fn im_back(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::ImBack,
            title: title.into(),
            value: value.into(),
        }
    }

    pub fn open_url(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::OpenUrl,
            title: title.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCard {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<CardImage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardAction>,
}

impl HeroCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_image(mut self, image: CardImage) -> Self {
        self.images.push(image);
        self
    }

    pub fn with_button(mut self, button: CardAction) -> Self {
        self.buttons.push(button);
        self
    }
}

/// A key/value line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub key: String,
    pub value: String,
}

impl Fact {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub text: String,
    pub subtitle: String,
    pub quantity: String,
    /// Display string, already formatted.
    pub price: String,
    pub image: CardImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptCard {
    pub title: String,
    pub facts: Vec<Fact>,
    pub items: Vec<ReceiptItem>,
    pub tax: String,
    pub total: String,
}

/// A card attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "contentType", content = "content")]
pub enum Card {
    #[serde(rename = "application/vnd.microsoft.card.hero")]
    Hero(HeroCard),
    #[serde(rename = "application/vnd.microsoft.card.receipt")]
    Receipt(ReceiptCard),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_gif_builds_data_url() {
        assert_eq!(CardImage::inline_gif("R0lG").url, "data:image/gif;base64,R0lG");
    }

    #[test]
    fn hero_card_serializes_with_content_type() {
        let card = Card::Hero(
            HeroCard::new("Welcome")
                .with_text("Ana")
                .with_button(CardAction::im_back("Go", "go")),
        );
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["contentType"], "application/vnd.microsoft.card.hero");
        assert_eq!(json["content"]["title"], "Welcome");
        assert_eq!(json["content"]["buttons"][0]["type"], "imBack");
        assert!(json["content"].get("subtitle").is_none());
    }

    #[test]
    fn open_url_action_serializes_type() {
        let json = serde_json::to_value(CardAction::open_url("Docs", "Login")).unwrap();
        assert_eq!(json["type"], "openUrl");
        assert_eq!(json["value"], "Login");
    }
}
