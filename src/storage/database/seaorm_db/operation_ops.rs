use crate::core::invite::{EnvironmentCode, Operation, StoreError};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, case_access_grant, case_message, invitation, unit_role_grant};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Run `operation` against the registered record for `invitation_id`
    ///
    /// Each operation runs in one transaction. Grant rows are keyed by
    /// invitation id, so re-running a grant after a partial failure is a no-op
    /// for the grant itself and only stamps `processed_at` if it is still unset.
    pub(super) async fn run_operation(
        &self,
        operation: Operation,
        invitation_id: &str,
        environment: EnvironmentCode,
    ) -> Result<(), StoreError> {
        debug!(
            "Applying {} to {} (environment {})",
            operation, invitation_id, environment
        );

        let txn = self.db.begin().await?;

        let record = entities::Invitation::find()
            .filter(invitation::Column::InvitationId.eq(invitation_id))
            .one(&txn)
            .await?
            .ok_or_else(|| {
                StoreError::backend(format!("no invitation record for {}", invitation_id))
            })?;

        match operation {
            Operation::GrantUnitRole => {
                unit_role_grant_insert(&record, environment)
                    .exec_without_returning(&txn)
                    .await?;
            }
            Operation::GrantCaseAccess => {
                case_access_grant_insert(&record, environment)?
                    .exec_without_returning(&txn)
                    .await?;
            }
            Operation::PostCaseNotification => {
                case_message_insert(&record, environment)?
                    .exec_without_returning(&txn)
                    .await?;
            }
        }

        if operation.completes_invitation() {
            entities::Invitation::update_many()
                .col_expr(
                    invitation::Column::ProcessedAt,
                    Expr::value(chrono::Utc::now()),
                )
                .filter(invitation::Column::Id.eq(record.id))
                .filter(invitation::Column::ProcessedAt.is_null())
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(())
    }
}

fn scoped_case(record: &invitation::Model) -> Result<i64, StoreError> {
    record.case_id.filter(|id| *id != 0).ok_or_else(|| {
        StoreError::backend(format!(
            "invitation {} is not scoped to a case",
            record.invitation_id
        ))
    })
}

// MySQL has no ON CONFLICT; `do_nothing_on` renders a no-op
// ON DUPLICATE KEY UPDATE there and ON CONFLICT DO NOTHING elsewhere.

fn unit_role_grant_insert(
    record: &invitation::Model,
    environment: EnvironmentCode,
) -> Insert<unit_role_grant::ActiveModel> {
    let grant = unit_role_grant::ActiveModel {
        id: NotSet,
        invitation_id: Set(record.invitation_id.clone()),
        unit_id: Set(record.unit_id),
        user_id: Set(record.invitee),
        role_type_id: Set(record.role_type_id),
        is_occupant: Set(record.is_occupant),
        environment_code: Set(environment.0),
        created_at: Set(chrono::Utc::now()),
    };

    entities::UnitRoleGrant::insert(grant).on_conflict(
        OnConflict::column(unit_role_grant::Column::InvitationId)
            .do_nothing_on([unit_role_grant::Column::InvitationId])
            .to_owned(),
    )
}

fn case_access_grant_insert(
    record: &invitation::Model,
    environment: EnvironmentCode,
) -> Result<Insert<case_access_grant::ActiveModel>, StoreError> {
    let grant = case_access_grant::ActiveModel {
        id: NotSet,
        invitation_id: Set(record.invitation_id.clone()),
        case_id: Set(scoped_case(record)?),
        unit_id: Set(record.unit_id),
        user_id: Set(record.invitee),
        role_type_id: Set(record.role_type_id),
        environment_code: Set(environment.0),
        created_at: Set(chrono::Utc::now()),
    };

    Ok(entities::CaseAccessGrant::insert(grant).on_conflict(
        OnConflict::column(case_access_grant::Column::InvitationId)
            .do_nothing_on([case_access_grant::Column::InvitationId])
            .to_owned(),
    ))
}

fn case_message_insert(
    record: &invitation::Model,
    environment: EnvironmentCode,
) -> Result<Insert<case_message::ActiveModel>, StoreError> {
    let message = case_message::ActiveModel {
        id: NotSet,
        invitation_id: Set(record.invitation_id.clone()),
        case_id: Set(scoped_case(record)?),
        author_id: Set(record.invited_by),
        body: Set(format!(
            "User {} has been invited to this case",
            record.invitee
        )),
        environment_code: Set(environment.0),
        created_at: Set(chrono::Utc::now()),
    };

    Ok(entities::CaseMessage::insert(message).on_conflict(
        OnConflict::column(case_message::Column::InvitationId)
            .do_nothing_on([case_message::Column::InvitationId])
            .to_owned(),
    ))
}
