//! Phase enums with a fixed set of legal moves.

use super::ValidationError;

/// An enum whose values form a directed graph of allowed moves.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// States reachable in one move from `self`.
    fn successors(&self) -> &'static [Self];

    fn can_transition_to(&self, target: &Self) -> bool {
        self.successors().contains(target)
    }

    /// Returns `target` if the move is legal.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::illegal_transition(self, target))
        }
    }

    fn is_terminal(&self) -> bool {
        self.successors().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Door {
        Open,
        Shut,
        Bricked,
    }

    impl StateMachine for Door {
        fn successors(&self) -> &'static [Self] {
            match self {
                Door::Open => &[Door::Shut],
                Door::Shut => &[Door::Open, Door::Bricked],
                Door::Bricked => &[],
            }
        }
    }

    #[test]
    fn legal_move_returns_target() {
        assert_eq!(Door::Shut.transition_to(Door::Bricked), Ok(Door::Bricked));
    }

    #[test]
    fn illegal_move_is_rejected() {
        let err = Door::Open.transition_to(Door::Bricked).unwrap_err();
        assert_eq!(err, ValidationError::illegal_transition(Door::Open, Door::Bricked));
    }

    #[test]
    fn state_without_successors_is_terminal() {
        assert!(Door::Bricked.is_terminal());
        assert!(!Door::Open.is_terminal());
    }
}
