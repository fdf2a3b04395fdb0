//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the dialogue engine and the outside world. Adapters implement these ports.
//!
//! - `IntentClassifier` - Language understanding service
//! - `CatalogLookup` - Product and customer reads
//! - `SessionStore` - Per-user / per-conversation state
//! - `ReplySink` - Ordered delivery of replies to the channel

mod catalog_lookup;
mod intent_classifier;
mod reply_sink;
mod session_store;

pub use catalog_lookup::{CatalogLookup, LookupError};
pub use intent_classifier::{ClassificationError, IntentClassifier};
pub use reply_sink::{DeliveryError, ReplySink};
pub use session_store::{SessionStore, SessionStoreError, StateKey, StateProperty, StateScope};
