//! Classification domain.
//!
//! Value types describing what the language understanding service said
//! about one utterance, plus the pure helpers the dialogue engine uses to
//! pick entities out of that answer.
//!
//! - `ClassificationResult` - top intent, confidence and ordered entities
//! - `Entity` / `EntityLabel` - typed spans extracted from the utterance
//! - `Intent` - the four intents the assistant acts on
//! - `extractor` - first-match lookups over entities

mod entity;
pub mod extractor;
mod intent;
mod result;

pub use entity::{Entity, EntityLabel};
pub use extractor::{first_entity, first_of};
pub use intent::Intent;
pub use result::ClassificationResult;
