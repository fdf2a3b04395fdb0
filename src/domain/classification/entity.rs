//! Entities extracted from an utterance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label assigned to an extracted entity.
///
/// Wire names follow the language service: prebuilt entities carry a
/// `builtin.` prefix, custom ones use the name given in the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    Email,
    Number,
    ProductId,
    ProductName,
    Other(String),
}

impl EntityLabel {
    pub const EMAIL: &'static str = "builtin.email";
    pub const NUMBER: &'static str = "builtin.number";
    pub const PRODUCT: &'static str = "Product";
    pub const PRODUCT_NAME: &'static str = "ProductName";

    /// Maps a wire label onto a typed label. Unknown labels are kept verbatim.
    pub fn from_wire(label: &str) -> Self {
        match label {
            Self::EMAIL => EntityLabel::Email,
            Self::NUMBER => EntityLabel::Number,
            Self::PRODUCT => EntityLabel::ProductId,
            Self::PRODUCT_NAME => EntityLabel::ProductName,
            other => EntityLabel::Other(other.to_string()),
        }
    }

    /// Returns the label as the language service spells it.
    pub fn as_wire(&self) -> &str {
        match self {
            EntityLabel::Email => Self::EMAIL,
            EntityLabel::Number => Self::NUMBER,
            EntityLabel::ProductId => Self::PRODUCT,
            EntityLabel::ProductName => Self::PRODUCT_NAME,
            EntityLabel::Other(raw) => raw,
        }
    }
}

impl From<String> for EntityLabel {
    fn from(value: String) -> Self {
        EntityLabel::from_wire(&value)
    }
}

impl From<EntityLabel> for String {
    fn from(value: EntityLabel) -> Self {
        value.as_wire().to_string()
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A typed span of the utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub label: EntityLabel,
    pub raw_text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    /// Prebuilt entities come back without a score.
    pub score: Option<f64>,
}

impl Entity {
    /// Creates an entity without offsets or score.
    pub fn new(label: EntityLabel, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let end_offset = raw_text.chars().count().saturating_sub(1);
        Self {
            label,
            raw_text,
            start_offset: 0,
            end_offset,
            score: None,
        }
    }

    /// Sets the span offsets.
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start_offset = start;
        self.end_offset = end;
        self
    }

    /// Sets the score.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Returns true if the entity carries the given label.
    pub fn is(&self, label: &EntityLabel) -> bool {
        &self.label == label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_labels_map_to_typed_labels() {
        assert_eq!(EntityLabel::from_wire("builtin.email"), EntityLabel::Email);
        assert_eq!(EntityLabel::from_wire("builtin.number"), EntityLabel::Number);
        assert_eq!(EntityLabel::from_wire("Product"), EntityLabel::ProductId);
        assert_eq!(EntityLabel::from_wire("ProductName"), EntityLabel::ProductName);
    }

    #[test]
    fn unknown_wire_label_is_kept() {
        let label = EntityLabel::from_wire("builtin.datetimeV2.date");
        assert_eq!(label, EntityLabel::Other("builtin.datetimeV2.date".into()));
        assert_eq!(label.as_wire(), "builtin.datetimeV2.date");
    }

    #[test]
    fn wire_label_matching_is_case_sensitive() {
        assert_eq!(
            EntityLabel::from_wire("productname"),
            EntityLabel::Other("productname".into())
        );
    }

    #[test]
    fn label_serializes_as_wire_string() {
        let json = serde_json::to_string(&EntityLabel::Email).unwrap();
        assert_eq!(json, "\"builtin.email\"");
        let back: EntityLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EntityLabel::Email);
    }

    #[test]
    fn new_entity_spans_its_text() {
        let entity = Entity::new(EntityLabel::Number, "712");
        assert_eq!(entity.start_offset, 0);
        assert_eq!(entity.end_offset, 2);
        assert!(entity.score.is_none());
    }
}
