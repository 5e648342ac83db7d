//! Signup, login, refresh and the token gate.

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

use restaurant_auth::{Claims, JwtEncoder, TokenType};
use restaurant_core::config::AuthConfig;

use crate::helpers::{TEST_PASSWORD, TEST_SECRET, TestApp};

fn login_body(email: &str, password: &str) -> serde_json::Value {
    json!({ "email": email, "password": password })
}

#[tokio::test]
async fn test_sign_up_returns_tokens_without_password() {
    let app = TestApp::new();
    let response = app.sign_up("grace@example.com", "555-0001").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    let data = response.data();
    assert!(data["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(data["refresh_token"].as_str().is_some());
    assert_eq!(data["user"]["email"], "grace@example.com");
    assert!(data["user"].get("password").is_none());
    assert!(data["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_conflict_and_stores_one_user() {
    let app = TestApp::new();
    let (token, _) = app.signed_up("dup@example.com", "555-0002").await;

    let response = app.sign_up("dup@example.com", "555-0003").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");

    let users = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(users.status, StatusCode::OK);
    assert_eq!(users.data()["total_count"], 1);
}

#[tokio::test]
async fn test_duplicate_phone_is_conflict() {
    let app = TestApp::new();
    app.signed_up("first@example.com", "555-0004").await;

    let response = app.sign_up("second@example.com", "555-0004").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "This phone number already exists");
}

#[tokio::test]
async fn test_sign_up_validates_body() {
    let app = TestApp::new();

    let response = app.sign_up("not-an-email", "555-0005").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app
        .request("POST", "/users/sign_up", Some(json!({ "email": 3 })), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_issues_valid_session_token() {
    let app = TestApp::new();
    app.signed_up("login@example.com", "555-0006").await;

    let response = app
        .request(
            "POST",
            "/users/login",
            Some(login_body("login@example.com", TEST_PASSWORD)),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let token = response.data()["token"].as_str().unwrap();
    let me = app.request("GET", "/users/me", None, Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.data()["email"], "login@example.com");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials_alike() {
    let app = TestApp::new();
    app.signed_up("who@example.com", "555-0007").await;

    let wrong_password = app
        .request(
            "POST",
            "/users/login",
            Some(login_body("who@example.com", "not-the-password")),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/users/login",
            Some(login_body("nobody@example.com", TEST_PASSWORD)),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], unknown_email.body["message"]);
}

#[tokio::test]
async fn test_refresh_exchanges_refresh_token_only() {
    let app = TestApp::new();
    let signup = app.sign_up("refresh@example.com", "555-0008").await;
    let session = signup.data()["token"].as_str().unwrap().to_string();
    let refresh = signup.data()["refresh_token"].as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/users/refresh",
            Some(json!({ "refresh_token": refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let fresh = response.data()["token"].as_str().unwrap();
    let me = app.request("GET", "/users/me", None, Some(fresh)).await;
    assert_eq!(me.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/users/refresh",
            Some(json!({ "refresh_token": session })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_token_is_rejected_before_the_store() {
    let app = TestApp::new();
    let before = app.store_calls();

    let response = app.request("GET", "/users", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
    assert_eq!(app.store_calls(), before);
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = TestApp::new();
    let before = app.store_calls();

    let response = app
        .request("GET", "/menus", None, Some("not.a.token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid token")
    );
    assert_eq!(app.store_calls(), before);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new();
    let encoder = JwtEncoder::new(&AuthConfig {
        jwt_secret: TEST_SECRET.to_string(),
        ..AuthConfig::default()
    });
    let now = Utc::now().timestamp();
    let token = encoder
        .encode_claims(&Claims {
            email: "late@example.com".into(),
            first_name: "Late".into(),
            last_name: "Comer".into(),
            uid: "u-1".into(),
            iat: now - 7200,
            exp: now - 3600,
            token_type: TokenType::Session,
        })
        .unwrap();

    let response = app.request("GET", "/tables", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = TestApp::new();
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["store"], "connected");
}
