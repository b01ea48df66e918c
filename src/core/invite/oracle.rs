//! Idempotency checks backed by the invitation record

use super::error::InviteError;
use super::store::InvitationStore;
use super::types::RecordState;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Answers whether an invitation was seen and whether it was fully processed
///
/// A missing record is a normal negative answer. Only store failures are errors.
#[derive(Clone)]
pub struct IdempotencyOracle {
    store: Arc<dyn InvitationStore>,
}

impl IdempotencyOracle {
    pub fn new(store: Arc<dyn InvitationStore>) -> Self {
        Self { store }
    }

    /// Stored state of the record with this id, if there is one
    pub async fn record(&self, invitation_id: &str) -> Result<Option<RecordState>, InviteError> {
        self.store
            .find_record(invitation_id)
            .await
            .map_err(InviteError::LookupFailure)
    }

    /// True iff a record with this id exists, processed or not
    pub async fn record_exists(&self, invitation_id: &str) -> Result<bool, InviteError> {
        Ok(self.record(invitation_id).await?.is_some())
    }

    /// Completion timestamp, set only when the record exists and is processed
    pub async fn completion_time(
        &self,
        invitation_id: &str,
    ) -> Result<Option<DateTime<Utc>>, InviteError> {
        Ok(self
            .record(invitation_id)
            .await?
            .and_then(|r| r.processed_at))
    }
}
