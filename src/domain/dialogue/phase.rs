//! Per-turn phase machine.
//!
//! `Start → Classified → Dispatched → Replied`, with `Start → Replied` for
//! turns that never reach the classifier (non-message activities, name
//! collection, classifier failure).

use crate::domain::foundation::{StateMachine, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Start,
    Classified,
    Dispatched,
    Replied,
}

impl StateMachine for TurnPhase {
    fn successors(&self) -> &'static [Self] {
        use TurnPhase::*;
        match self {
            Start => &[Classified, Replied],
            Classified => &[Dispatched],
            Dispatched => &[Replied],
            Replied => &[],
        }
    }
}

/// Tracks the phase of the turn in flight.
#[derive(Debug, Clone)]
pub struct TurnTrace {
    phase: TurnPhase,
}

impl TurnTrace {
    pub fn new() -> Self {
        Self {
            phase: TurnPhase::Start,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn advance(&mut self, target: TurnPhase) -> Result<(), ValidationError> {
        self.phase = self.phase.transition_to(target)?;
        Ok(())
    }
}

impl Default for TurnTrace {
    fn default() -> Self {
        Self::new()
    }
}
