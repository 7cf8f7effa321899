use actix_web::{
    http::{header, StatusCode},
    test, web,
};
use drivebook::{TokenPair, TokenStore};
use drivebook_rest::{config::AppConfig, create_app};

#[actix_web::test]
async fn guarded_routes_reject_unauthenticated_requests() {
    let config = AppConfig::test();
    let oauth = config.oauth_client();
    let app = test::init_service(create_app!(config, oauth, TokenStore::new())).await;

    let requests = [
        test::TestRequest::post()
            .uri("/api/save-journal")
            .set_json(serde_json::json!({ "journalData": {} })),
        test::TestRequest::get().uri("/api/load-journal"),
        test::TestRequest::get().uri("/api/user-profile"),
    ];

    for req in requests {
        let res = test::call_service(&app, req.to_request()).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            test::read_body(res).await,
            web::Bytes::from_static(b"Not authenticated. Please connect to Google Drive first.")
        );
    }
}

#[actix_web::test]
async fn auth_redirects_to_the_consent_screen() {
    let config = AppConfig::test();
    let oauth = config.oauth_client();
    let app = test::init_service(create_app!(config, oauth, TokenStore::new())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/google/auth").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::FOUND);

    let location = res
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();

    assert!(location.starts_with("https://accounts.google.com/o/oauth2/v2/auth"));
    assert!(location.contains("access_type=offline"));
    assert!(location.contains("client_id=test-client-id"));
    assert!(location.contains("redirect_uri="));
    assert!(location.contains("drive.file"));
    assert!(location.contains("userinfo.profile"));
}

#[actix_web::test]
async fn failed_code_exchange_is_a_500() {
    let config = AppConfig::test();
    let oauth = config.oauth_client();
    let app = test::init_service(create_app!(config, oauth, TokenStore::new())).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/google/callback?code=bogus")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        test::read_body(res).await,
        web::Bytes::from_static(b"Authentication failed")
    );
}

#[actix_web::test]
async fn storage_failures_map_to_the_fixed_500_bodies() {
    let config = AppConfig::test();
    let oauth = config.oauth_client();
    let tokens = TokenStore::new();
    tokens.set(TokenPair {
        access_token: "not-a-real-token".into(),
        refresh_token: None,
    });
    let app = test::init_service(create_app!(config, oauth, tokens)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/load-journal").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        test::read_body(res).await,
        web::Bytes::from_static(b"Failed to load journal")
    );

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/save-journal")
            .set_json(serde_json::json!({ "journalData": { "mood": "ok" } }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        test::read_body(res).await,
        web::Bytes::from_static(b"Failed to save journal")
    );
}

#[actix_web::test]
async fn health_reports_the_version() {
    let config = AppConfig::test();
    let oauth = config.oauth_client();
    let app = test::init_service(create_app!(config, oauth, TokenStore::new())).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
