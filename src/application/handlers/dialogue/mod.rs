//! Dialogue handlers - one turn of the retail assistant.
//!
//! `DialogueEngine` routes each activity by kind. Messages are classified
//! and branched by intent (`login`, `product_info`, `add_to_cart`,
//! `place_order`), or handed to `fallback` when confidence is too low.
//! Conversation updates trigger the `greeting`.

mod add_to_cart;
mod engine;
mod error;
mod fallback;
mod greeting;
mod login;
mod name_prompt;
mod place_order;
mod product_info;
pub mod session_state;

pub use engine::{DialogueEngine, TurnReport};
pub use error::TurnError;
pub use greeting::GreetingLatch;
