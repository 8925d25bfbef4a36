#![allow(clippy::unused_async, unused_must_use)]
//! Tests for the token administration API.

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

/// ## Summary
/// Test that the API is hidden when no admin secret is configured.
#[test_log::test(tokio::test)]
async fn api_is_hidden_without_admin_secret() {
    let fixture = Fixture::new().await;
    let service = fixture.service();

    TestRequest::get("/api/tokens")
        .bearer(ADMIN_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// Test that a wrong or missing bearer secret is rejected.
#[test_log::test(tokio::test)]
async fn api_requires_admin_secret() {
    let fixture = Fixture::new().await;
    let service = fixture.admin_service();

    TestRequest::get("/api/tokens")
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_header("WWW-Authenticate", "Bearer");

    TestRequest::get("/api/tokens")
        .bearer("guess")
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    TestRequest::get("/api/tokens")
        .basic(ADMIN_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

/// ## Summary
/// Test that a created token can be used right away.
#[test_log::test(tokio::test)]
async fn created_token_authenticates() {
    let fixture = Fixture::new().await;
    let service = fixture.admin_service();

    let created = TestRequest::post("/api/tokens")
        .bearer(ADMIN_SECRET)
        .json_body(&json!({
            "name": "Tablet",
            "description": "Front desk",
            "permissions": ["busy_slots"]
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    assert_eq!(created["name"], "Tablet");
    assert_eq!(created["permissions"], json!(["busy_slots"]));
    assert_eq!(created["active"], true);
    let secret = created["secret"].as_str().expect("secret in response");
    assert!(!secret.is_empty());

    TestRequest::get(&event_path("busy-b1.ics"))
        .basic(secret)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    TestRequest::get(&event_path("apt-a1.ics"))
        .basic(secret)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// Test that invalid token requests are rejected.
#[test_log::test(tokio::test)]
async fn invalid_create_requests_are_rejected() {
    let fixture = Fixture::new().await;
    let service = fixture.admin_service();

    for body in [
        json!({ "name": "  ", "permissions": ["appointments"] }),
        json!({ "name": "Empty", "permissions": [] }),
        json!({ "name": "Bad", "permissions": ["everything"] }),
        json!({ "permissions": ["appointments"] }),
    ] {
        TestRequest::post("/api/tokens")
            .bearer(ADMIN_SECRET)
            .json_body(&body)
            .send(&service)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

/// ## Summary
/// Test that listing never exposes secrets.
#[test_log::test(tokio::test)]
async fn list_omits_secrets() {
    let fixture = Fixture::new().await;
    let service = fixture.admin_service();

    let listed = TestRequest::get("/api/tokens")
        .bearer(ADMIN_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains(T1_SECRET)
        .json();

    let tokens = listed.as_array().expect("array of tokens");
    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|t| t.get("secret").is_none()));
    assert!(tokens.iter().any(|t| t["id"] == fixture.t1.id.to_string()));
}

/// ## Summary
/// Test that deactivating a token locks it out and reactivating restores access.
#[test_log::test(tokio::test)]
async fn deactivation_revokes_access() {
    let fixture = Fixture::new().await;
    let service = fixture.admin_service();
    let path = format!("/api/tokens/{}", fixture.t1.id);

    TestRequest::patch(&path)
        .bearer(ADMIN_SECRET)
        .json_body(&json!({ "active": false }))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    TestRequest::get(&event_path("busy-b1.ics"))
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    TestRequest::patch(&path)
        .bearer(ADMIN_SECRET)
        .json_body(&json!({ "active": true }))
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    TestRequest::get(&event_path("busy-b1.ics"))
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
}

/// ## Summary
/// Test that deleting a token removes it for good.
#[test_log::test(tokio::test)]
async fn delete_removes_token() {
    let fixture = Fixture::new().await;
    let service = fixture.admin_service();
    let path = format!("/api/tokens/{}", fixture.t1.id);

    TestRequest::delete(&path)
        .bearer(ADMIN_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    TestRequest::delete(&path)
        .bearer(ADMIN_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    TestRequest::propfind(COLLECTION_PATH)
        .basic(T1_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

/// ## Summary
/// Test that unknown and malformed ids answer 404.
#[test_log::test(tokio::test)]
async fn unknown_ids_are_not_found() {
    let fixture = Fixture::new().await;
    let service = fixture.admin_service();

    TestRequest::patch(&format!("/api/tokens/{}", uuid::Uuid::now_v7()))
        .bearer(ADMIN_SECRET)
        .json_body(&json!({ "active": false }))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    TestRequest::delete("/api/tokens/not-a-uuid")
        .bearer(ADMIN_SECRET)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
