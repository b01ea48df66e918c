//! Pull and push workflows against SQLite and a mock upstream

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{InvitationFactory, MockUpstream, TestDatabase};
    use invite_relay::core::invite::{EnvironmentCode, InviteService, Stage};
    use invite_relay::utils::error::RelayError;
    use invite_relay::Invitation;
    use tokio_util::sync::CancellationToken;

    fn service(db: &TestDatabase, upstream: &MockUpstream) -> InviteService {
        let client = upstream.client();
        InviteService::new(
            db.store(),
            client.clone(),
            client,
            EnvironmentCode(1),
            CancellationToken::new(),
        )
    }

    async fn processed(db: &TestDatabase, id: &str) -> bool {
        db.db()
            .find_invitation(id)
            .await
            .unwrap()
            .and_then(|record| record.processed_at)
            .is_some()
    }

    #[tokio::test]
    async fn test_pull_processes_and_reports() {
        let db = TestDatabase::seeded().await;
        let pending = vec![
            InvitationFactory::unit("a1", "occupant"),
            InvitationFactory::case("a2", "agent", 99),
        ];
        let upstream = MockUpstream::start(&pending, 200).await;

        let summary = assert_ok!(service(&db, &upstream).pull().await);

        assert_eq!(summary.received, 2);
        assert_eq!(summary.reported, vec!["a1", "a2"]);
        assert!(processed(&db, "a1").await);
        assert!(processed(&db, "a2").await);
        assert_eq!(
            upstream.reported().await,
            vec![vec!["a1".to_string(), "a2".to_string()]]
        );
    }

    #[tokio::test]
    async fn test_redelivery_only_re_reports() {
        let db = TestDatabase::seeded().await;
        let pending = vec![InvitationFactory::unit("a1", "occupant")];
        let upstream = MockUpstream::start(&pending, 200).await;
        let service = service(&db, &upstream);

        assert_ok!(service.pull().await);
        let first = db.db().find_invitation("a1").await.unwrap().unwrap();

        let summary = assert_ok!(service.pull().await);
        let second = db.db().find_invitation("a1").await.unwrap().unwrap();

        assert_eq!(first, second);
        assert!(summary.completed[0].redelivered);
        assert_eq!(upstream.reported().await.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_role_fails_only_that_invitation() {
        let db = TestDatabase::seeded().await;
        let pending = vec![
            InvitationFactory::unit("a1", "occupant"),
            InvitationFactory::unit("a3", "janitor"),
        ];
        let upstream = MockUpstream::start(&pending, 200).await;

        let err = service(&db, &upstream).pull().await.unwrap_err();

        let batch = match err {
            RelayError::Batch(batch) => batch,
            other => panic!("expected batch error, got {other}"),
        };
        assert_eq!(batch.len(), 1);
        assert!(batch.contains("a3", Stage::RoleLookup));
        assert!(db.db().find_invitation("a3").await.unwrap().is_none());
        assert!(processed(&db, "a1").await);
        assert_eq!(upstream.reported().await, vec![vec!["a1".to_string()]]);
    }

    #[tokio::test]
    async fn test_rejected_report_keeps_invitations_processed() {
        let db = TestDatabase::seeded().await;
        let pending = vec![InvitationFactory::unit("a1", "tenant")];
        let upstream = MockUpstream::start(&pending, 503).await;

        let err = service(&db, &upstream).pull().await.unwrap_err();

        let batch = match err {
            RelayError::Batch(batch) => batch,
            other => panic!("expected batch error, got {other}"),
        };
        assert!(batch.contains("a1", Stage::Report));
        assert!(processed(&db, "a1").await);
    }

    #[tokio::test]
    async fn test_push_registers_and_grants_without_reporting() {
        let db = TestDatabase::seeded().await;
        let upstream = MockUpstream::start(&[], 200).await;
        let pushed: Vec<Invitation> = vec![
            InvitationFactory::unit("p1", "landlord"),
            InvitationFactory::case("p2", "agent", 12),
        ];

        let summary = assert_ok!(service(&db, &upstream).push(pushed).await);

        assert_eq!(summary.granted, vec!["p1", "p2"]);
        assert!(processed(&db, "p1").await);
        assert!(processed(&db, "p2").await);
        assert!(upstream.reported().await.is_empty());
    }

    #[tokio::test]
    async fn test_push_of_processed_invitation_is_duplicate() {
        let db = TestDatabase::seeded().await;
        let upstream = MockUpstream::start(&[], 200).await;
        let service = service(&db, &upstream);

        assert_ok!(
            service
                .push(vec![InvitationFactory::unit("p1", "tenant")])
                .await
        );
        let err = service
            .push(vec![InvitationFactory::unit("p1", "tenant")])
            .await
            .unwrap_err();

        let batch = match err {
            RelayError::Batch(batch) => batch,
            other => panic!("expected batch error, got {other}"),
        };
        assert!(batch.contains("p1", Stage::Register));
    }

    #[tokio::test]
    async fn test_status_check() {
        let db = TestDatabase::seeded().await;
        let pending = vec![InvitationFactory::unit("a1", "occupant")];
        let upstream = MockUpstream::start(&pending, 200).await;
        let service = service(&db, &upstream);

        assert!(assert_ok!(service.status("a1").await).is_none());
        assert_ok!(service.pull().await);
        let state = assert_ok!(service.status("a1").await).expect("record after pull");
        assert!(state.processed_at.is_some());
    }
}
