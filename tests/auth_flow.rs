mod common;

use actix_web::{http::StatusCode, test};
use common::{client::{basic_auth, TestClient}, TestContext};
use course_api::types::error::AppError;
use course_api::utils::auth::authenticate;

#[actix_web::test]
async fn test_auth_flow_valid_credentials() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user = client.create_test_user(None).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(user.auth_header())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_auth_flow_wrong_password() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user = client.create_test_user(None).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(basic_auth(&user.email, "wrong password"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_auth_flow_unknown_email() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(basic_auth("nobody@test.com", "whatever"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_auth_flow_missing_header() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/users")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_auth_flow_malformed_header() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    for value in ["Basic !!!not-base64!!!", "Bearer sometoken", "Basic"] {
        let req = test::TestRequest::get()
            .uri("/users")
            .insert_header(("Authorization", value))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "header: {value}");
    }
}

#[actix_web::test]
async fn test_authenticate_direct() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let user = client.create_test_user(None).await.unwrap();

    let resolved = authenticate(ctx.db.as_ref(), &user.email, Some(&user.password))
        .await
        .expect("valid credentials");
    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email_address, user.email);

    let missing = authenticate(ctx.db.as_ref(), &user.email, None).await;
    assert!(matches!(missing, Err(AppError::Unauthorized)));

    let wrong = authenticate(ctx.db.as_ref(), &user.email, Some("nope")).await;
    assert!(matches!(wrong, Err(AppError::Unauthorized)));
}
