//! Result of dispatching one turn.

use std::fmt;

use super::ReplyAction;

/// Why a turn intentionally produced no reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoActionReason {
    /// The top intent is not one the assistant handles.
    UnrecognizedIntent(String),
    /// ProductInfo without a product id or product name entity.
    NoProductReference,
    /// AddToCart whose first entity is not a usable number.
    NoProductNumber,
    /// PlaceOrder with nothing in the cart.
    EmptyCart,
    /// The conversation was already greeted.
    AlreadyGreeted,
}

impl fmt::Display for NoActionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoActionReason::UnrecognizedIntent(name) => write!(f, "unrecognized intent '{}'", name),
            NoActionReason::NoProductReference => f.write_str("no product reference"),
            NoActionReason::NoProductNumber => f.write_str("no product number"),
            NoActionReason::EmptyCart => f.write_str("empty cart"),
            NoActionReason::AlreadyGreeted => f.write_str("already greeted"),
        }
    }
}

/// What a turn decided to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Replied(Vec<ReplyAction>),
    NoAction(NoActionReason),
}

impl TurnOutcome {
    /// A single plain text reply.
    pub fn say(text: impl Into<String>) -> Self {
        TurnOutcome::Replied(vec![ReplyAction::text(text)])
    }

    pub fn actions(&self) -> &[ReplyAction] {
        match self {
            TurnOutcome::Replied(actions) => actions,
            TurnOutcome::NoAction(_) => &[],
        }
    }

    pub fn is_no_action(&self) -> bool {
        matches!(self, TurnOutcome::NoAction(_))
    }
}
