//! User listing, lookup and profile updates.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_second_page_starts_after_first_page() {
    let app = TestApp::new();
    let (token, _) = app.signed_up("user0@example.com", "555-1000").await;
    for i in 1..6 {
        app.signed_up(&format!("user{i}@example.com"), &format!("555-100{i}"))
            .await;
    }

    let response = app
        .request("GET", "/users?page=2&recordPerPage=5", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["total_count"], 6);
    let items = response.data()["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["email"], "user5@example.com");

    let response = app
        .request("GET", "/users?recordPerPage=2&startIndex=3", None, Some(&token))
        .await;
    let emails: Vec<&str> = response.data()["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, ["user3@example.com", "user4@example.com"]);
}

#[tokio::test]
async fn test_unparsable_paging_falls_back_to_first_page() {
    let app = TestApp::new();
    let (token, _) = app.signed_up("solo@example.com", "555-2000").await;

    let response = app
        .request("GET", "/users?page=abc&recordPerPage=0", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_page_far_past_the_end_is_empty() {
    let app = TestApp::new();
    let (token, _) = app.signed_up("far@example.com", "555-2500").await;

    let response = app
        .request(
            "GET",
            "/users?page=10000000000&recordPerPage=10000000000",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["total_count"], 1);
    assert!(response.data()["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_user_by_id_and_unknown_id() {
    let app = TestApp::new();
    let (token, user_id) = app.signed_up("find@example.com", "555-3000").await;

    let found = app
        .request("GET", &format!("/users/{user_id}"), None, Some(&token))
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.data()["user_id"], user_id.as_str());

    let missing = app
        .request("GET", "/users/does-not-exist", None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_profile_update_is_limited_to_self() {
    let app = TestApp::new();
    let (token, user_id) = app.signed_up("self@example.com", "555-4000").await;
    let (_, other_id) = app.signed_up("other@example.com", "555-4001").await;

    let response = app
        .request(
            "PATCH",
            &format!("/users/{user_id}"),
            Some(json!({ "first_name": "Amazing", "avatar": "http://img/me.png" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["first_name"], "Amazing");
    assert_eq!(response.data()["last_name"], "Hopper");

    let response = app
        .request(
            "PATCH",
            &format!("/users/{other_id}"),
            Some(json!({ "first_name": "Mallory" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update_rejects_taken_phone() {
    let app = TestApp::new();
    let (token, user_id) = app.signed_up("a@example.com", "555-5000").await;
    app.signed_up("b@example.com", "555-5001").await;

    let response = app
        .request(
            "PATCH",
            &format!("/users/{user_id}"),
            Some(json!({ "phone": "555-5001" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}
