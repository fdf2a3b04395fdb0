//! Application handlers.
//!
//! Handlers that orchestrate domain operations against the ports.

pub mod dialogue;

pub use dialogue::{DialogueEngine, GreetingLatch, TurnError, TurnReport};
