//! HTTP-level integration tests for the contact form and admin inbox.

mod common;

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use common::{auth_token, body_json, delete_auth, get, get_auth, post_json, put_json_auth};
use http_body_util::BodyExt;
use portfolio_core::roles::ROLE_ADMIN;
use sqlx::PgPool;

/// Submit a contact message via the public form, returning its id.
async fn submit_message(pool: &PgPool, name: &str, message: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "sender_name": name,
        "sender_email": "sender@example.com",
        "subject": "Inquiry",
        "body": message
    });
    let response = post_json(app, "/api/v1/contact", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// The public form accepts a valid submission and rejects a missing body.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_message(pool: PgPool) {
    submit_message(&pool, "Lina", "I would like a website.").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "sender_name": "Lina",
        "sender_email": "not-an-email",
        "body": ""
    });
    let response = post_json(app, "/api/v1/contact", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error_ar"].is_string());
}

/// The inbox is admin-only and supports the unread filter and counter.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inbox_flow(pool: PgPool) {
    let first = submit_message(&pool, "Alice", "First message").await;
    let _second = submit_message(&pool, "Bob", "Second message").await;

    // Anonymous access is rejected.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/contact/messages").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = auth_token(&pool, "inboxadmin", ROLE_ADMIN).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/contact/messages", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let json =
        body_json(get_auth(app, "/api/v1/contact/messages/unread-count", &token).await).await;
    assert_eq!(json["data"]["unread"], 2);

    // Mark the first as read; the unread filter now excludes it.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "is_read": true });
    let response = put_json_auth(
        app,
        &format!("/api/v1/contact/messages/{first}/read"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get_auth(app, "/api/v1/contact/messages?unread_only=true", &token).await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["sender_name"], "Bob");

    // Delete the read one.
    let app = common::build_test_app(pool.clone());
    let response =
        delete_auth(app, &format!("/api/v1/contact/messages/{first}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/contact/messages", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// The CSV export carries the right headers and escapes quoted fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_csv_export(pool: PgPool) {
    submit_message(&pool, "Sam, the \"client\"", "Needs, commas").await;

    let token = auth_token(&pool, "csvadmin", ROLE_ADMIN).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/contact/messages/export/csv", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    assert!(response
        .headers()
        .get(CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .contains("contact_messages.csv"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.starts_with("id,"), "CSV must begin with a header row");
    assert!(csv.contains("\"Sam, the \"\"client\"\"\""));
}
