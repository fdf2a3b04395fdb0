//! Domain layer containing the assistant's business types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors, state machine)
//! - `classification` - Classifier results, entities, intents, extraction
//! - `catalog` - Products, customers and money
//! - `session` - Cart, conversation progress and the per-turn state snapshot
//! - `dialogue` - Activities, reply actions, cards and the turn phase machine

pub mod catalog;
pub mod classification;
pub mod dialogue;
pub mod foundation;
pub mod session;
