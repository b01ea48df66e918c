//! Batch processing of invitations
//!
//! Items are handled one at a time, in order. A failing item is recorded in
//! the [`BatchOutcome`] and the loop moves on; nothing aborts the batch.
//! Cancellation is only observed between items.

use super::error::{InviteError, ItemFailure, Stage};
use super::executor::StepExecutor;
use super::in_flight::InFlight;
use super::oracle::IdempotencyOracle;
use super::outcome::{BatchOutcome, Completed};
use super::roles::RoleResolver;
use super::store::CompletionReporter;
use super::types::Invitation;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, error, info, info_span, warn};

/// Drives the per-item workflow over a batch
#[derive(Clone)]
pub struct BatchProcessor {
    oracle: IdempotencyOracle,
    roles: RoleResolver,
    executor: StepExecutor,
    reporter: Arc<dyn CompletionReporter>,
    in_flight: InFlight,
}

impl BatchProcessor {
    pub fn new(
        oracle: IdempotencyOracle,
        roles: RoleResolver,
        executor: StepExecutor,
        reporter: Arc<dyn CompletionReporter>,
    ) -> Self {
        Self {
            oracle,
            roles,
            executor,
            reporter,
            in_flight: InFlight::new(),
        }
    }

    pub fn oracle(&self) -> &IdempotencyOracle {
        &self.oracle
    }

    /// Full workflow for invitations pulled from upstream: skip what is already
    /// complete, register or resume, grant, confirm, notify, then report every
    /// eligible id upstream in one call.
    pub async fn process_pull(
        &self,
        invitations: &[Invitation],
        cancel: &CancellationToken,
    ) -> BatchOutcome {
        info!(count = invitations.len(), "processing pulled invitations");

        let mut outcome = BatchOutcome::new(invitations.len());
        for (index, invitation) in invitations.iter().enumerate() {
            if cancel.is_cancelled() {
                Self::cancel_rest(&invitations[index..], &mut outcome);
                break;
            }

            let span = info_span!("invitation", index, invitation_id = %invitation.id);
            async {
                if let Err(failure) = Self::validate(invitation) {
                    outcome.failures.push(failure);
                    return;
                }
                let Some(_guard) = self.in_flight.claim(&invitation.id) else {
                    warn!("invitation is being processed by another run, skipping");
                    outcome.skipped.push(invitation.id.clone());
                    return;
                };
                self.process_pulled(invitation, &mut outcome).await;
            }
            .instrument(span)
            .await;
        }

        self.report(&mut outcome).await;
        outcome
    }

    /// Register-and-grant flow for invitations pushed by a trusted caller. No
    /// completion check, no confirmation and no upstream report.
    pub async fn process_push(
        &self,
        invitations: &[Invitation],
        cancel: &CancellationToken,
    ) -> BatchOutcome {
        info!(count = invitations.len(), "processing pushed invitations");

        let mut outcome = BatchOutcome::new(invitations.len());
        for (index, invitation) in invitations.iter().enumerate() {
            if cancel.is_cancelled() {
                Self::cancel_rest(&invitations[index..], &mut outcome);
                break;
            }

            let span = info_span!("invitation", index, invitation_id = %invitation.id);
            async {
                if let Err(failure) = Self::validate(invitation) {
                    outcome.failures.push(failure);
                    return;
                }
                let Some(_guard) = self.in_flight.claim(&invitation.id) else {
                    warn!("invitation is being processed by another run, skipping");
                    outcome.skipped.push(invitation.id.clone());
                    return;
                };
                match self.register_and_grant(invitation).await {
                    Ok(()) => outcome.granted.push(invitation.id.clone()),
                    Err(failure) => outcome.failures.push(failure),
                }
            }
            .instrument(span)
            .await;
        }

        outcome
    }

    async fn process_pulled(&self, invitation: &Invitation, outcome: &mut BatchOutcome) {
        let id = invitation.id.as_str();

        match self.oracle.completion_time(id).await {
            Ok(Some(processed_at)) => {
                warn!(
                    stage = %Stage::CompletionCheck,
                    elapsed_secs = (Utc::now() - processed_at).num_seconds(),
                    "stale redelivery, already processed"
                );
                outcome.completed.push(Completed {
                    id: id.to_string(),
                    processed_at,
                    redelivered: true,
                });
                return;
            }
            Ok(None) => {}
            Err(e) => {
                outcome
                    .failures
                    .push(Self::fail(id, Stage::CompletionCheck, e));
                return;
            }
        }

        match self.oracle.record_exists(id).await {
            Ok(false) => {
                info!(stage = %Stage::Register, "inserting invitation record");
                if let Err(failure) = self.resolve_and_register(invitation).await {
                    outcome.failures.push(failure);
                    return;
                }
            }
            Ok(true) => {
                info!(
                    stage = %Stage::Register,
                    "record exists but is incomplete, resuming at grant"
                );
            }
            Err(e) => {
                outcome
                    .failures
                    .push(Self::fail(id, Stage::ExistenceCheck, e));
                return;
            }
        }

        info!(stage = %Stage::Grant, case_id = ?invitation.case(), "granting access");
        let operation = match self.executor.grant(invitation).await {
            Ok(operation) => operation,
            Err(e) => {
                outcome.failures.push(Self::fail(id, Stage::Grant, e));
                return;
            }
        };

        let processed_at = match self.oracle.completion_time(id).await {
            Ok(Some(processed_at)) => processed_at,
            Ok(None) => {
                outcome.failures.push(Self::fail(
                    id,
                    Stage::Confirm,
                    InviteError::Inconsistency { operation },
                ));
                return;
            }
            Err(e) => {
                outcome.failures.push(Self::fail(id, Stage::Confirm, e));
                return;
            }
        };

        info!(
            stage = %Stage::Report,
            elapsed_secs = (Utc::now() - processed_at).num_seconds(),
            "processed, eligible for completion report"
        );
        outcome.completed.push(Completed {
            id: id.to_string(),
            processed_at,
            redelivered: false,
        });

        if let Some(case_id) = invitation.case() {
            info!(stage = %Stage::Notify, case_id, "posting invitation message to case");
            if let Err(e) = self.executor.post_case_notification(invitation).await {
                outcome.failures.push(Self::fail(id, Stage::Notify, e));
            }
        } else {
            debug!(stage = %Stage::Notify, "no case, skipping notification");
        }
    }

    async fn register_and_grant(&self, invitation: &Invitation) -> Result<(), ItemFailure> {
        self.resolve_and_register(invitation).await?;
        self.executor
            .grant(invitation)
            .await
            .map_err(|e| Self::fail(&invitation.id, Stage::Grant, e))?;
        Ok(())
    }

    async fn resolve_and_register(&self, invitation: &Invitation) -> Result<(), ItemFailure> {
        let role_type_id = self
            .roles
            .resolve(&invitation.role)
            .await
            .map_err(|e| Self::fail(&invitation.id, Stage::RoleLookup, e))?;

        self.executor
            .register(invitation, role_type_id)
            .await
            .map_err(|e| Self::fail(&invitation.id, Stage::Register, e))
    }

    /// Report every eligible id once. A rejected report is recorded against each
    /// id but the items stay complete; the next redelivery re-reports them.
    async fn report(&self, outcome: &mut BatchOutcome) {
        let mut seen = HashSet::new();
        let ids: Vec<String> = outcome
            .eligible_ids()
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();

        if ids.is_empty() {
            debug!("nothing to report");
            return;
        }

        info!(count = ids.len(), ids = ?ids, "marking invitations done upstream");
        if let Err(e) = self.reporter.report_done(&ids).await {
            warn!(error = %e, "completion report failed");
            let message = e.to_string();
            for id in ids {
                outcome.failures.push(ItemFailure::new(
                    id,
                    Stage::Report,
                    InviteError::ReportFailure(message.clone()),
                ));
            }
        } else {
            outcome.reported = ids;
        }
    }

    fn validate(invitation: &Invitation) -> Result<(), ItemFailure> {
        if invitation.id.trim().is_empty() {
            return Err(Self::fail(
                &invitation.id,
                Stage::Validate,
                InviteError::InvalidInvitation("empty invitation id".to_string()),
            ));
        }
        Ok(())
    }

    fn cancel_rest(rest: &[Invitation], outcome: &mut BatchOutcome) {
        warn!(
            remaining = rest.len(),
            "run cancelled, leaving remaining invitations for redelivery"
        );
        outcome
            .cancelled
            .extend(rest.iter().map(|invitation| invitation.id.clone()));
    }

    fn fail(id: &str, stage: Stage, error: InviteError) -> ItemFailure {
        error!(%stage, error = %error, "invitation failed");
        ItemFailure::new(id, stage, error)
    }
}
