//! Gateway behavior against a live loopback backend: credential attachment,
//! error-message extraction, and 401 reporting.

mod common;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use client_lib::adapters::{MemoryCredentialStore, MemoryNotifier};
use client_lib::gateway::{GatewayError, SessionEvent};
use common::{bare_gateway, serve};
use serde_json::{json, Value};
use std::sync::Arc;

fn user_body() -> Value {
    json!({
        "id": 1,
        "username": "ada",
        "email": "ada@example.com",
        "role": "student",
        "created_at": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn attaches_bearer_credential_from_the_store() {
    let app = Router::new().route(
        "/api/v1/auth/me",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if auth == "Bearer tok-1" {
                (StatusCode::OK, Json(user_body()))
            } else {
                (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "bad token" })))
            }
        }),
    );
    let base = serve(app).await;

    let credentials = Arc::new(MemoryCredentialStore::with_token("tok-1"));
    let notifier = Arc::new(MemoryNotifier::default());
    let (gateway, _events) = bare_gateway(&base, credentials, notifier);

    let user = client_lib::api::auth::current_user(&gateway)
        .await
        .expect("authenticated call");
    assert_eq!(user.username, "ada");
}

#[tokio::test]
async fn error_message_prefers_detail_and_is_toasted() {
    let app = Router::new().route(
        "/api/v1/auth/me",
        get(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": "document not found", "message": "other" })),
            )
        }),
    );
    let base = serve(app).await;

    let notifier = Arc::new(MemoryNotifier::default());
    let (gateway, _events) = bare_gateway(
        &base,
        Arc::new(MemoryCredentialStore::default()),
        notifier.clone(),
    );

    let err = client_lib::api::auth::current_user(&gateway)
        .await
        .expect_err("should fail");
    match err {
        GatewayError::Api { status, message } => {
            assert_eq!(status, reqwest::StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(message, "document not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(notifier.errors(), vec!["document not found".to_string()]);
}

#[tokio::test]
async fn unstructured_error_bodies_fall_back_to_the_fixed_message() {
    let app = Router::new().route(
        "/api/v1/auth/me",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;

    let notifier = Arc::new(MemoryNotifier::default());
    let (gateway, _events) = bare_gateway(
        &base,
        Arc::new(MemoryCredentialStore::default()),
        notifier.clone(),
    );

    let err = client_lib::api::auth::current_user(&gateway)
        .await
        .expect_err("should fail");
    match err {
        GatewayError::Api { message, .. } => assert_eq!(message, "Request failed"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(notifier.errors(), vec!["Request failed".to_string()]);
}

#[tokio::test]
async fn undecodable_success_body_is_toasted_as_a_transport_failure() {
    let app = Router::new().route(
        "/api/v1/auth/me",
        get(|| async { (StatusCode::OK, "not json") }),
    );
    let base = serve(app).await;

    let notifier = Arc::new(MemoryNotifier::default());
    let (gateway, _events) = bare_gateway(
        &base,
        Arc::new(MemoryCredentialStore::default()),
        notifier.clone(),
    );

    let err = client_lib::api::auth::current_user(&gateway)
        .await
        .expect_err("should fail");
    assert!(matches!(err, GatewayError::Transport(_)));
    assert_eq!(notifier.errors(), vec!["Request failed".to_string()]);
}

#[tokio::test]
async fn unauthorized_responses_emit_a_session_event() {
    let app = Router::new().route(
        "/api/v1/auth/me",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "token expired" })),
            )
        }),
    );
    let base = serve(app).await;

    let notifier = Arc::new(MemoryNotifier::default());
    let (gateway, mut events) = bare_gateway(
        &base,
        Arc::new(MemoryCredentialStore::with_token("stale")),
        notifier,
    );

    let _ = client_lib::api::auth::current_user(&gateway).await;
    assert_eq!(events.recv().await, Some(SessionEvent::Unauthorized));
}

#[tokio::test]
async fn non_401_failures_do_not_emit_session_events() {
    let app = Router::new().route(
        "/api/v1/auth/me",
        get(|| async { (StatusCode::BAD_GATEWAY, Json(json!({ "detail": "down" }))) }),
    );
    let base = serve(app).await;

    let notifier = Arc::new(MemoryNotifier::default());
    let (gateway, mut events) = bare_gateway(
        &base,
        Arc::new(MemoryCredentialStore::default()),
        notifier,
    );

    let _ = client_lib::api::auth::current_user(&gateway).await;
    assert!(events.try_recv().is_err());
}
