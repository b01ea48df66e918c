//! Entry points wiring the workflow to its collaborators

use super::error::{BatchError, InviteError};
use super::executor::StepExecutor;
use super::oracle::IdempotencyOracle;
use super::outcome::BatchSummary;
use super::processor::BatchProcessor;
use super::roles::RoleResolver;
use super::store::{CompletionReporter, InvitationSource, InvitationStore};
use super::types::{EnvironmentCode, Invitation, RecordState};
use crate::utils::error::{RelayError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info, info_span, warn};

/// Pull, push and status operations over one store and one upstream
#[derive(Clone)]
pub struct InviteService {
    source: Arc<dyn InvitationSource>,
    processor: BatchProcessor,
    shutdown: CancellationToken,
    batches: Arc<AtomicU64>,
}

impl InviteService {
    pub fn new(
        store: Arc<dyn InvitationStore>,
        source: Arc<dyn InvitationSource>,
        reporter: Arc<dyn CompletionReporter>,
        environment: EnvironmentCode,
        shutdown: CancellationToken,
    ) -> Self {
        let processor = BatchProcessor::new(
            IdempotencyOracle::new(store.clone()),
            RoleResolver::new(store.clone()),
            StepExecutor::new(store, environment),
            reporter,
        );

        Self {
            source,
            processor,
            shutdown,
            batches: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Token cancelled when the process is shutting down
    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }

    /// Fetch the pending list and run the full workflow over it
    pub async fn pull(&self) -> Result<BatchSummary> {
        let batch = self.next_batch();
        self.fetch_and_process()
            .instrument(info_span!("batch", batch, path = "pull"))
            .await
    }

    async fn fetch_and_process(&self) -> Result<BatchSummary> {
        let invitations = self.source.fetch_pending().await.map_err(|e| {
            warn!(error = %e, "failed to fetch pending invitations");
            e
        })?;

        if invitations.is_empty() {
            info!("no pending invitations");
            return Ok(BatchSummary::default());
        }

        let outcome = self
            .processor
            .process_pull(&invitations, &self.shutdown)
            .await;
        Self::finish(outcome.into_result())
    }

    /// Register and grant invitations supplied by the caller
    pub async fn push(&self, invitations: Vec<Invitation>) -> Result<BatchSummary> {
        if invitations.is_empty() {
            return Err(RelayError::bad_request("Empty payload"));
        }

        let batch = self.next_batch();
        let outcome = self
            .processor
            .process_push(&invitations, &self.shutdown)
            .instrument(info_span!("batch", batch, path = "push"))
            .await;
        Self::finish(outcome.into_result())
    }

    /// Stored record state for one invitation; `None` when it was never
    /// registered
    pub async fn status(&self, invitation_id: &str) -> Result<Option<RecordState>> {
        self.processor
            .oracle()
            .record(invitation_id)
            .await
            .map_err(|e| match e {
                InviteError::LookupFailure(source) => RelayError::Store(source),
                other => RelayError::Internal(other.to_string()),
            })
    }

    fn next_batch(&self) -> u64 {
        self.batches.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn finish(result: std::result::Result<BatchSummary, BatchError>) -> Result<BatchSummary> {
        match result {
            Ok(summary) => {
                info!(
                    received = summary.received,
                    completed = summary.completed.len(),
                    granted = summary.granted.len(),
                    reported = summary.reported.len(),
                    "batch finished"
                );
                Ok(summary)
            }
            Err(e) => {
                warn!(failures = e.len(), "batch finished with failures");
                Err(RelayError::Batch(e))
            }
        }
    }
}
