//! Application layer - Turn handling.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{DialogueEngine, GreetingLatch, TurnError, TurnReport};
