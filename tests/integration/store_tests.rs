//! Store integration tests
//!
//! Exercises the SeaORM store through the workflow's store contract.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{InvitationFactory, TestDatabase};
    use invite_relay::core::invite::{
        DEFAULT_ANNOTATION, EnvironmentCode, InvitationStore, NewInvitationRecord, Operation,
        StoreError,
    };
    use invite_relay::storage::database::entities::{
        self, case_access_grant, case_message, unit_role_grant,
    };
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    async fn register(db: &TestDatabase, invitation: invite_relay::Invitation, role: &str) {
        let record = NewInvitationRecord::new(invitation, db.role_id(role));
        assert_ok!(db.store().insert_record(record).await);
    }

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_migrations_are_repeatable() {
        let db = TestDatabase::new().await;
        assert!(db.db().migrate().await.is_ok());
    }

    #[tokio::test]
    async fn test_role_lookup_is_exact() {
        let db = TestDatabase::seeded().await;
        let store = db.store();

        assert_eq!(
            assert_ok!(store.find_role_type_id("occupant").await),
            Some(db.role_id("occupant"))
        );
        assert_eq!(assert_ok!(store.find_role_type_id("Occupant").await), None);
        assert_eq!(assert_ok!(store.find_role_type_id("owner").await), None);
    }

    #[tokio::test]
    async fn test_missing_record_is_not_an_error() {
        let db = TestDatabase::seeded().await;
        assert_eq!(assert_ok!(db.store().find_record("nope").await), None);
    }

    #[tokio::test]
    async fn test_registered_record_starts_incomplete() {
        let db = TestDatabase::seeded().await;
        register(&db, InvitationFactory::unit("a1", "occupant"), "occupant").await;

        let state = assert_ok!(db.store().find_record("a1").await).unwrap();
        assert!(state.processed_at.is_none());

        let record = assert_ok!(db.db().find_invitation("a1").await).unwrap();
        assert_eq!(record.role_type_id, db.role_id("occupant"));
        assert_eq!(record.annotation, DEFAULT_ANNOTATION);
        assert_eq!(record.case_id, None);
        assert!(record.is_occupant);
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_detected() {
        let db = TestDatabase::seeded().await;
        register(&db, InvitationFactory::unit("a1", "tenant"), "tenant").await;

        let again = NewInvitationRecord::new(
            InvitationFactory::unit("a1", "tenant"),
            db.role_id("tenant"),
        );
        let err = db.store().insert_record(again).await.unwrap_err();

        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_unit_grant_marks_record_processed() {
        let db = TestDatabase::seeded().await;
        register(&db, InvitationFactory::unit("a1", "occupant"), "occupant").await;
        let store = db.store();

        assert_ok!(
            store
                .apply(Operation::GrantUnitRole, "a1", EnvironmentCode(2))
                .await
        );

        let state = assert_ok!(store.find_record("a1").await).unwrap();
        assert!(state.processed_at.is_some());

        let grant = entities::UnitRoleGrant::find()
            .filter(unit_role_grant::Column::InvitationId.eq("a1"))
            .one(db.db().connection())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(grant.user_id, 7);
        assert_eq!(grant.unit_id, 3);
        assert_eq!(grant.role_type_id, db.role_id("occupant"));
        assert_eq!(grant.environment_code, 2);
    }

    #[tokio::test]
    async fn test_repeated_grant_is_idempotent() {
        let db = TestDatabase::seeded().await;
        register(&db, InvitationFactory::unit("a1", "tenant"), "tenant").await;
        let store = db.store();

        assert_ok!(
            store
                .apply(Operation::GrantUnitRole, "a1", EnvironmentCode(1))
                .await
        );
        let first = assert_ok!(store.find_record("a1").await).unwrap();

        assert_ok!(
            store
                .apply(Operation::GrantUnitRole, "a1", EnvironmentCode(1))
                .await
        );
        let second = assert_ok!(store.find_record("a1").await).unwrap();

        assert_eq!(first, second);
        let grants = entities::UnitRoleGrant::find()
            .count(db.db().connection())
            .await
            .unwrap();
        assert_eq!(grants, 1);
    }

    #[tokio::test]
    async fn test_case_grant_and_notification() {
        let db = TestDatabase::seeded().await;
        register(&db, InvitationFactory::case("a2", "agent", 99), "agent").await;
        let store = db.store();

        assert_ok!(
            store
                .apply(Operation::GrantCaseAccess, "a2", EnvironmentCode(1))
                .await
        );
        assert!(
            assert_ok!(store.find_record("a2").await)
                .unwrap()
                .processed_at
                .is_some()
        );

        assert_ok!(
            store
                .apply(Operation::PostCaseNotification, "a2", EnvironmentCode(1))
                .await
        );

        let conn = db.db().connection();
        let grant = entities::CaseAccessGrant::find()
            .filter(case_access_grant::Column::InvitationId.eq("a2"))
            .one(conn)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(grant.case_id, 99);

        let message = entities::CaseMessage::find()
            .filter(case_message::Column::CaseId.eq(99))
            .one(conn)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(message.author_id, 2);
        assert!(message.body.contains('7'));

        assert_eq!(
            entities::UnitRoleGrant::find().count(conn).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_notification_does_not_complete_record() {
        let db = TestDatabase::seeded().await;
        register(&db, InvitationFactory::case("a2", "agent", 99), "agent").await;
        let store = db.store();

        assert_ok!(
            store
                .apply(Operation::PostCaseNotification, "a2", EnvironmentCode(1))
                .await
        );

        assert!(
            assert_ok!(store.find_record("a2").await)
                .unwrap()
                .processed_at
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_operation_without_record_fails() {
        let db = TestDatabase::seeded().await;

        let err = db
            .store()
            .apply(Operation::GrantUnitRole, "ghost", EnvironmentCode(1))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Backend(ref m) if m.contains("ghost")));
    }

    #[tokio::test]
    async fn test_case_grant_requires_case() {
        let db = TestDatabase::seeded().await;
        register(&db, InvitationFactory::unit("a1", "tenant"), "tenant").await;

        let err = db
            .store()
            .apply(Operation::GrantCaseAccess, "a1", EnvironmentCode(1))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Backend(_)));
        assert!(
            assert_ok!(db.store().find_record("a1").await)
                .unwrap()
                .processed_at
                .is_none()
        );
    }
}
