//! Classifier Adapters - Implementations of the IntentClassifier port.
//!
//! - **LuisClassifier** - LUIS v2 prediction endpoint over HTTP
//! - **ScriptedClassifier** - Queued answers for tests and offline runs

mod luis_classifier;
mod scripted_classifier;

pub use luis_classifier::{LuisClassifier, LuisConfig};
pub use scripted_classifier::ScriptedClassifier;
