//! In-memory transport for tests and offline runs.

use std::cell::RefCell;

use super::{Settlement, Submission, Transport};
use crate::error::{Error, Result};

/// Records every submission and answers with a fixed outcome.
#[derive(Debug)]
pub struct RecordingTransport {
    sent: RefCell<Vec<Submission>>,
    outcome: Result<Settlement>,
}

impl RecordingTransport {
    /// Accepts everything with HTTP 200.
    pub fn new() -> Self {
        Self::with_outcome(Ok(Settlement::Accepted { status: 200 }))
    }

    pub fn with_outcome(outcome: Result<Settlement>) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            outcome,
        }
    }

    pub fn sent(&self) -> Vec<Submission> {
        self.sent.borrow().clone()
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for RecordingTransport {
    fn submit(&self, submission: &Submission) -> Result<Settlement> {
        self.sent.borrow_mut().push(submission.clone());
        match &self.outcome {
            Ok(settlement) => Ok(settlement.clone()),
            Err(e) => Err(Error::Http(e.to_string())),
        }
    }
}
