//! HTTP routes end to end

#[cfg(test)]
mod tests {
    use crate::common::{InvitationFactory, MockUpstream, TestDatabase};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use invite_relay::config::Config;
    use invite_relay::core::invite::{
        EnvironmentCode, InvitationStore, InviteService, NewInvitationRecord,
    };
    use invite_relay::server::{AppState, HttpServer};
    use tokio_util::sync::CancellationToken;

    fn state(db: &TestDatabase, upstream: &MockUpstream) -> web::Data<AppState> {
        let client = upstream.client();
        let service = InviteService::new(
            db.store(),
            client.clone(),
            client,
            EnvironmentCode(1),
            CancellationToken::new(),
        );
        web::Data::new(AppState::new(Config::default(), service, db.storage()))
    }

    fn text(body: &[u8]) -> String {
        String::from_utf8_lossy(body).into_owned()
    }

    #[actix_web::test]
    async fn test_pull_route() {
        let db = TestDatabase::seeded().await;
        let pending = vec![InvitationFactory::unit("a1", "occupant")];
        let upstream = MockUpstream::start(&pending, 200).await;
        let app = test::init_service(HttpServer::create_app(state(&db, &upstream))).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("X-Robots-Tag").unwrap(), "none");
        assert_eq!(text(&test::read_body(resp).await), "Pulled 1");
    }

    #[actix_web::test]
    async fn test_pull_route_reports_batch_failure() {
        let db = TestDatabase::seeded().await;
        let pending = vec![InvitationFactory::unit("a3", "janitor")];
        let upstream = MockUpstream::start(&pending, 200).await;
        let app = test::init_service(HttpServer::create_app(state(&db, &upstream))).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = text(&test::read_body(resp).await);
        assert!(body.contains("a3 [role_lookup]"));
    }

    #[actix_web::test]
    async fn test_push_then_check() {
        let db = TestDatabase::seeded().await;
        let upstream = MockUpstream::start(&[], 200).await;
        let app = test::init_service(HttpServer::create_app(state(&db, &upstream))).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(InvitationFactory::body(&[InvitationFactory::case(
                "p9", "tenant", 41,
            )]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(text(&test::read_body(resp).await), "Pushed 1");

        let req = test::TestRequest::get().uri("/check?id=p9").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(text(&test::read_body(resp).await).starts_with("Got a date: "));
    }

    #[actix_web::test]
    async fn test_check_distinguishes_unknown_and_unprocessed() {
        let db = TestDatabase::seeded().await;
        let upstream = MockUpstream::start(&[], 200).await;
        let invitation = InvitationFactory::unit("r1", "occupant");
        let record = NewInvitationRecord::new(invitation, db.role_id("occupant"));
        db.store().insert_record(record).await.unwrap();
        let app = test::init_service(HttpServer::create_app(state(&db, &upstream))).await;

        let req = test::TestRequest::get().uri("/check?id=r1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(text(&test::read_body(resp).await).contains("there is no processed_datetime"));

        let req = test::TestRequest::get().uri("/check?id=r2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(text(&test::read_body(resp).await).contains("Not processed"));
    }

    #[actix_web::test]
    async fn test_health_and_version() {
        let db = TestDatabase::seeded().await;
        let upstream = MockUpstream::start(&[], 200).await;
        let app = test::init_service(HttpServer::create_app(state(&db, &upstream))).await;

        let req = test::TestRequest::get().uri("/health_check").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/version").to_request();
        let body = text(&test::call_and_read_body(&app, req).await);
        assert!(body.contains(", commit "));
        assert!(body.contains(", built at "));
    }
}
