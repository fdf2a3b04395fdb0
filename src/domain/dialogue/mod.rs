//! Dialogue domain.
//!
//! Incoming activities, outgoing reply actions, the card payloads they
//! carry, and the per-turn phase machine. Nothing here performs I/O; the
//! application layer's engine drives these types against the ports.

mod action;
mod activity;
mod cards;
pub mod messages;
mod outcome;
mod phase;
mod receipt;
pub mod replies;

pub use action::{AttachmentLayout, ReplyAction};
pub use activity::{Activity, ActivityKind};
pub use cards::{ActionKind, Card, CardAction, CardImage, Fact, HeroCard, ReceiptCard, ReceiptItem};
pub use outcome::{NoActionReason, TurnOutcome};
pub use phase::{TurnPhase, TurnTrace};
pub use receipt::ReceiptTotals;
