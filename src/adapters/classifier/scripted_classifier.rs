//! Scripted Classifier for testing.
//!
//! Answers come from a queue, in order. Once the queue is empty every
//! utterance classifies as `None` with zero confidence.
//!
//! # Example
//!
//! ```ignore
//! let classifier = ScriptedClassifier::new()
//!     .with_result(ClassificationResult::new("hi", "Login", 0.9))
//!     .with_error(ClassificationError::network("down"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::classification::ClassificationResult;
use crate::ports::{ClassificationError, IntentClassifier};

#[derive(Debug, Clone, Default)]
pub struct ScriptedClassifier {
    answers: Arc<Mutex<VecDeque<Result<ClassificationResult, ClassificationError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful classification.
    pub fn with_result(self, result: ClassificationResult) -> Self {
        self.push(Ok(result));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: ClassificationError) -> Self {
        self.push(Err(error));
        self
    }

    /// Queues an answer on a shared handle.
    pub fn push(&self, answer: Result<ClassificationResult, ClassificationError>) {
        if let Ok(mut answers) = self.answers.lock() {
            answers.push_back(answer);
        }
    }

    /// Returns the number of utterances classified so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Returns every utterance received, in order.
    pub fn utterances(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl IntentClassifier for ScriptedClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult, ClassificationError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }

        let next = self.answers.lock().ok().and_then(|mut a| a.pop_front());
        match next {
            Some(answer) => answer,
            None => Ok(ClassificationResult::new(text, "None", 0.0)),
        }
    }
}
