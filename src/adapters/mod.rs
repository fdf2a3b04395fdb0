//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the dialogue engine to external systems:
//! - `classifier` - Language understanding (LUIS, scripted)
//! - `catalog` - In-memory catalog
//! - `postgres` - PostgreSQL catalog reads
//! - `storage` - Session state stores (in-memory, YAML files)
//! - `channel` - Reply sinks (console, recording)

pub mod catalog;
pub mod channel;
pub mod classifier;
pub mod postgres;
pub mod storage;

pub use catalog::InMemoryCatalog;
pub use channel::{ConsoleSink, RecordingSink, SentReply};
pub use classifier::{LuisClassifier, LuisConfig, ScriptedClassifier};
pub use postgres::PostgresCatalogReader;
pub use storage::{FileSessionStore, InMemorySessionStore};
