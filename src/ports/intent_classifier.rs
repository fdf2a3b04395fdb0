//! Intent Classifier Port - Interface to the language understanding service.
//!
//! The engine hands over the raw utterance; encoding it for transport is the
//! adapter's job. Every failure mode is a distinct error so a broken service
//! is never mistaken for "no intent".

use async_trait::async_trait;

use crate::domain::classification::ClassificationResult;

/// Errors returned by a classifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassificationError {
    /// The service could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("classification timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The service answered with a non-success status.
    #[error("classifier returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("malformed classifier payload: {0}")]
    MalformedPayload(String),
}

impl ClassificationError {
    pub fn network(message: impl Into<String>) -> Self {
        ClassificationError::Network(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ClassificationError::MalformedPayload(message.into())
    }
}

/// Port for classifying one utterance.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classifies `text`, returning the top intent and ordered entities.
    async fn classify(&self, text: &str) -> Result<ClassificationResult, ClassificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_shows_code_and_body() {
        let err = ClassificationError::Status {
            status: 401,
            body: "Access denied".into(),
        };
        assert_eq!(err.to_string(), "classifier returned status 401: Access denied");
    }

    #[test]
    fn timeout_error_shows_duration() {
        let err = ClassificationError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10s"));
    }
}
