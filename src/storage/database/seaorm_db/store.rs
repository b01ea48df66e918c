use crate::core::invite::{
    EnvironmentCode, InvitationStore, NewInvitationRecord, Operation, RecordState, StoreError,
};
use async_trait::async_trait;

use super::types::SeaOrmDatabase;

#[async_trait]
impl InvitationStore for SeaOrmDatabase {
    async fn find_record(&self, invitation_id: &str) -> Result<Option<RecordState>, StoreError> {
        self.find_record_state(invitation_id).await
    }

    async fn find_role_type_id(&self, role: &str) -> Result<Option<i32>, StoreError> {
        self.find_role_type(role).await
    }

    async fn insert_record(&self, record: NewInvitationRecord) -> Result<(), StoreError> {
        self.insert_invitation(record).await
    }

    async fn apply(
        &self,
        operation: Operation,
        invitation_id: &str,
        environment: EnvironmentCode,
    ) -> Result<(), StoreError> {
        self.run_operation(operation, invitation_id, environment)
            .await
    }
}
