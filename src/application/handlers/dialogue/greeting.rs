//! Welcome greeting on conversation start.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::dialogue::{messages, NoActionReason, ReplyAction, TurnOutcome};
use crate::domain::session::SessionState;

/// Process-wide "already greeted" flag, shared by every engine that holds a clone.
///
/// Not coordinated with session state: two conversations starting at once
/// race for it and exactly one of them is greeted.
#[derive(Debug, Clone, Default)]
pub struct GreetingLatch(Arc<AtomicBool>);

impl GreetingLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true for the first caller only.
    pub fn claim(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Who has already been greeted.
#[derive(Debug, Clone)]
pub enum GreetingPolicy {
    /// Tracked in each conversation's progress.
    PerConversation,
    /// Tracked once for the whole process.
    ProcessWide(GreetingLatch),
}

impl GreetingPolicy {
    /// Marks the greeting as sent, returning false if it already was.
    fn claim(&self, state: &mut SessionState) -> bool {
        match self {
            GreetingPolicy::PerConversation => {
                if state.progress.greeted {
                    return false;
                }
                state.progress.greeted = true;
                true
            }
            GreetingPolicy::ProcessWide(latch) => latch.claim(),
        }
    }
}

/// Welcome, info and usage texts the first time; nothing afterwards.
pub fn greet(policy: &GreetingPolicy, store_name: &str, state: &mut SessionState) -> TurnOutcome {
    if !policy.claim(state) {
        return TurnOutcome::NoAction(NoActionReason::AlreadyGreeted);
    }

    TurnOutcome::Replied(vec![
        ReplyAction::text(messages::greeting(store_name)),
        ReplyAction::text(messages::INFO),
        ReplyAction::text(messages::USAGE_PATTERN),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_conversation_greets_once_per_state() {
        let policy = GreetingPolicy::PerConversation;
        let mut state = SessionState::new();

        let first = greet(&policy, "Adventure Works", &mut state);
        assert_eq!(first.actions().len(), 3);
        assert_eq!(
            first.actions()[0].as_text(),
            Some("Hi there. Welcome to Adventure Works")
        );
        assert!(state.progress.greeted);

        let second = greet(&policy, "Adventure Works", &mut state);
        assert_eq!(second, TurnOutcome::NoAction(NoActionReason::AlreadyGreeted));
    }

    #[test]
    fn process_latch_ignores_session_state() {
        let latch = GreetingLatch::new();
        let policy = GreetingPolicy::ProcessWide(latch.clone());

        let mut first = SessionState::new();
        let mut second = SessionState::new();

        assert!(!greet(&policy, "Store", &mut first).is_no_action());
        assert!(greet(&policy, "Store", &mut second).is_no_action());
        assert!(latch.is_set());
        assert!(!first.progress.greeted);
    }

    #[test]
    fn latch_clones_share_the_flag() {
        let latch = GreetingLatch::new();
        let other = latch.clone();
        assert!(other.claim());
        assert!(!latch.claim());
    }
}
