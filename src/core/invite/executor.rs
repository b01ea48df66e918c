//! Ordered side-effecting steps for one invitation
//!
//! None of the steps retry. A failed step is wrapped with its operation and
//! handed back to the caller.

use super::error::{InviteError, StoreError};
use super::store::InvitationStore;
use super::types::{EnvironmentCode, Invitation, NewInvitationRecord, Operation};
use std::sync::Arc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct StepExecutor {
    store: Arc<dyn InvitationStore>,
    environment: EnvironmentCode,
}

impl StepExecutor {
    pub fn new(store: Arc<dyn InvitationStore>, environment: EnvironmentCode) -> Self {
        Self { store, environment }
    }

    pub fn environment(&self) -> EnvironmentCode {
        self.environment
    }

    /// Insert the invitation record with its resolved role
    pub async fn register(
        &self,
        invitation: &Invitation,
        role_type_id: i32,
    ) -> Result<(), InviteError> {
        debug!(role_type_id, "registering invitation");

        let record = NewInvitationRecord::new(invitation.clone(), role_type_id);
        self.store
            .insert_record(record)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(_) => InviteError::DuplicateRegistration {
                    id: invitation.id.clone(),
                },
                other => InviteError::LookupFailure(other),
            })
    }

    /// Grant access at unit level, or scoped to the case when there is one.
    /// Exactly one of the two grant operations runs.
    pub async fn grant(&self, invitation: &Invitation) -> Result<Operation, InviteError> {
        let operation = invitation.grant_operation();
        self.run(operation, invitation).await?;
        Ok(operation)
    }

    /// Append the "invitation sent" message to the case feed
    pub async fn post_case_notification(&self, invitation: &Invitation) -> Result<(), InviteError> {
        self.run(Operation::PostCaseNotification, invitation).await
    }

    async fn run(&self, operation: Operation, invitation: &Invitation) -> Result<(), InviteError> {
        debug!(%operation, environment = %self.environment, "running operation");

        self.store
            .apply(operation, &invitation.id, self.environment)
            .await
            .map_err(|source| {
                error!(%operation, error = %source, "operation failed");
                InviteError::StepFailure { operation, source }
            })
    }
}
