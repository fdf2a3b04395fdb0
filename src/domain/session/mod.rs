//! Session domain.
//!
//! Everything the assistant remembers between turns. A turn works on a
//! `SessionState` snapshot and hands the modified copy back for a single
//! commit, so branches never leave partially applied changes behind.

mod cart;
mod progress;
mod state;

pub use cart::{Cart, CartLine};
pub use progress::ConversationProgress;
pub use state::SessionState;
