use crate::core::invite::{NewInvitationRecord, RecordState, StoreError};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, invitation, role_type};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find the stored record for an upstream invitation id
    pub async fn find_invitation(
        &self,
        invitation_id: &str,
    ) -> Result<Option<invitation::Model>, StoreError> {
        debug!("Finding invitation record: {}", invitation_id);

        let record = entities::Invitation::find()
            .filter(invitation::Column::InvitationId.eq(invitation_id))
            .one(&self.db)
            .await?;

        Ok(record)
    }

    pub(super) async fn find_record_state(
        &self,
        invitation_id: &str,
    ) -> Result<Option<RecordState>, StoreError> {
        Ok(self
            .find_invitation(invitation_id)
            .await?
            .map(|record| RecordState {
                processed_at: record.processed_at,
            }))
    }

    /// Look up a role id by exact role name
    pub async fn find_role_type(&self, role: &str) -> Result<Option<i32>, StoreError> {
        debug!("Finding role type: {:?}", role);

        let role = entities::RoleType::find()
            .filter(role_type::Column::RoleType.eq(role))
            .one(&self.db)
            .await?;

        Ok(role.map(|r| r.id))
    }

    /// Add a role to the role table, returning its id
    pub async fn insert_role_type(&self, role: &str) -> Result<i32, StoreError> {
        debug!("Inserting role type: {:?}", role);

        let active_model = role_type::ActiveModel {
            id: NotSet,
            role_type: Set(role.to_string()),
        };

        let result = entities::RoleType::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(duplicate_or_database)?;

        Ok(result.last_insert_id)
    }

    /// Insert a fresh invitation record; duplicate ids are rejected by the
    /// unique index on `invitation_id`
    pub async fn insert_invitation(&self, record: NewInvitationRecord) -> Result<(), StoreError> {
        let NewInvitationRecord {
            invitation,
            role_type_id,
            annotation,
        } = record;
        debug!("Registering invitation: {}", invitation.id);

        let case_id = invitation.case();
        let active_model = invitation::ActiveModel {
            id: NotSet,
            invitation_id: Set(invitation.id),
            invited_by: Set(invitation.invited_by),
            invitee: Set(invitation.invitee),
            role_type_id: Set(role_type_id),
            is_occupant: Set(invitation.is_occupant),
            case_id: Set(case_id),
            unit_id: Set(invitation.unit_id),
            invitation_type: Set(invitation.kind),
            annotation: Set(annotation),
            created_at: Set(chrono::Utc::now()),
            processed_at: Set(None),
        };

        entities::Invitation::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(duplicate_or_database)?;

        Ok(())
    }
}

fn duplicate_or_database(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::Duplicate(detail),
        _ => StoreError::Database(err),
    }
}
