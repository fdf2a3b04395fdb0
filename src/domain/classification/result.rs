//! The classifier's answer for one utterance.

use serde::{Deserialize, Serialize};

use super::{Entity, Intent};

/// Classification of a single utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The utterance as the service echoed it back.
    pub query: String,
    pub top_intent: String,
    /// Score of the top intent, in `[0, 1]`.
    pub confidence: f64,
    /// Entities in the order the service returned them.
    pub entities: Vec<Entity>,
}

impl ClassificationResult {
    pub fn new(query: impl Into<String>, top_intent: impl Into<String>, confidence: f64) -> Self {
        Self {
            query: query.into(),
            top_intent: top_intent.into(),
            confidence: confidence.clamp(0.0, 1.0),
            entities: Vec::new(),
        }
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn intent(&self) -> Intent {
        Intent::from_name(&self.top_intent)
    }

    /// Strictly above the threshold is accepted; equal to it is not.
    pub fn is_confident(&self, threshold: f64) -> bool {
        self.confidence > threshold
    }
}
