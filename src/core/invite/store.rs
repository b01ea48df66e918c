//! Collaborator contracts the invitation workflow runs against

use super::error::StoreError;
use super::types::{EnvironmentCode, Invitation, NewInvitationRecord, Operation, RecordState};
use async_trait::async_trait;

/// Relational store holding invitation records, role lookups and the named
/// side-effecting operations
#[async_trait]
pub trait InvitationStore: Send + Sync {
    /// Point lookup of an invitation record; `None` when no record exists
    async fn find_record(&self, invitation_id: &str) -> Result<Option<RecordState>, StoreError>;

    /// Role id for an exact role name; `None` when the role is unknown
    async fn find_role_type_id(&self, role: &str) -> Result<Option<i32>, StoreError>;

    /// Insert a new invitation record; fails with [`StoreError::Duplicate`] when
    /// the id is taken
    async fn insert_record(&self, record: NewInvitationRecord) -> Result<(), StoreError>;

    /// Run a named operation for a registered invitation
    async fn apply(
        &self,
        operation: Operation,
        invitation_id: &str,
        environment: EnvironmentCode,
    ) -> Result<(), StoreError>;
}

/// Source of pending invitations
#[async_trait]
pub trait InvitationSource: Send + Sync {
    async fn fetch_pending(&self) -> crate::utils::error::Result<Vec<Invitation>>;
}

/// Tells the upstream system which invitations are done
#[async_trait]
pub trait CompletionReporter: Send + Sync {
    async fn report_done(&self, ids: &[String]) -> crate::utils::error::Result<()>;
}
