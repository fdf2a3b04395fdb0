//! Errors that abort a turn.
//!
//! None of these reach the user verbatim: the engine logs them and replies
//! with a single apology text instead.

use thiserror::Error;

use crate::ports::{ClassificationError, LookupError, SessionStoreError};

#[derive(Debug, Clone, Error)]
pub enum TurnError {
    #[error("classification failed: {0}")]
    Classification(#[from] ClassificationError),

    #[error("catalog lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("session store failed: {0}")]
    Store(#[from] SessionStoreError),
}
