//! Error types for the domain layer.

use thiserror::Error;

/// Rejections raised while building domain values from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("{field} is not a number: '{input}'")]
    NotANumber { field: &'static str, input: String },

    #[error("illegal transition from {from} to {to}")]
    IllegalTransition { from: String, to: String },
}

impl ValidationError {
    pub fn blank(field: &'static str) -> Self {
        ValidationError::Blank { field }
    }

    pub fn not_a_number(field: &'static str, input: impl Into<String>) -> Self {
        ValidationError::NotANumber {
            field,
            input: input.into(),
        }
    }

    pub fn illegal_transition(from: impl std::fmt::Debug, to: impl std::fmt::Debug) -> Self {
        ValidationError::IllegalTransition {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}
