//! In-memory result of one processing run

use super::error::{BatchError, ItemFailure};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An invitation judged complete and eligible to be reported done
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completed {
    pub id: String,
    pub processed_at: DateTime<Utc>,
    /// Already complete before this run started
    pub redelivered: bool,
}

/// Per-run aggregate, never persisted
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Number of invitations in the batch
    pub received: usize,
    pub completed: Vec<Completed>,
    pub failures: Vec<ItemFailure>,
    /// Ids registered and granted by the push flow
    pub granted: Vec<String>,
    /// Ids the upstream accepted as done
    pub reported: Vec<String>,
    /// Ids another run in this process was already handling
    pub skipped: Vec<String>,
    /// Ids left untouched because the run was cancelled
    pub cancelled: Vec<String>,
}

impl BatchOutcome {
    pub fn new(received: usize) -> Self {
        Self {
            received,
            ..Self::default()
        }
    }

    /// Ids to hand to the completion reporter, in batch order
    pub fn eligible_ids(&self) -> Vec<String> {
        self.completed.iter().map(|c| c.id.clone()).collect()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Split into the summary and, when anything failed, the aggregate error
    pub fn into_result(self) -> Result<BatchSummary, BatchError> {
        if self.failures.is_empty() {
            Ok(BatchSummary {
                received: self.received,
                completed: self.completed,
                granted: self.granted,
                reported: self.reported,
                skipped: self.skipped,
                cancelled: self.cancelled,
            })
        } else {
            Err(BatchError::new(self.failures))
        }
    }
}

/// Successful run report
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub received: usize,
    pub completed: Vec<Completed>,
    pub granted: Vec<String>,
    pub reported: Vec<String>,
    pub skipped: Vec<String>,
    pub cancelled: Vec<String>,
}
