#![allow(dead_code)]

//! Test infrastructure for sb-server API tests

use sb_auth::{IdTokenClaims, JwtVerifier, SessionRegistry};
use sb_core::DayBoundary;
use sb_domain::{AttendanceLedger, BoardService, IdentityResolver, TaskPlanner};
use sb_server::AppState;
use sb_store::MemoryStore;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use tower::ServiceExt;

/// HS256 secret shared between the test verifier and minted tokens
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create AppState for testing: memory store, seeded board, HS256 verifier
pub async fn create_test_app_state() -> AppState {
    let store = Arc::new(MemoryStore::new());

    AppState {
        users: store.clone(),
        resolver: Arc::new(IdentityResolver::new(store.clone())),
        ledger: Arc::new(AttendanceLedger::new(store.clone(), DayBoundary::Utc)),
        planner: Arc::new(TaskPlanner::new(store.clone())),
        board: Arc::new(
            BoardService::open(store.clone())
                .await
                .expect("board seeding failed"),
        ),
        sessions: Arc::new(SessionRegistry::new(3600)),
        verifier: Some(Arc::new(JwtVerifier::with_hs256(TEST_JWT_SECRET))),
        allow_anonymous: true,
    }
}

/// Mint an id token the test verifier will accept
pub fn mint_id_token(sub: &str, name: &str) -> String {
    let claims = IdTokenClaims {
        sub: sub.to_string(),
        name: Some(name.to_string()),
        email: Some(format!("{}@example.com", sub)),
        picture: None,
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .expect("failed to mint test token")
}

/// Sign in anonymously and return the session token
pub async fn sign_in_anonymous(state: &AppState, name: &str) -> String {
    let app = sb_server::build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/anonymous")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "displayName": name }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let json = body_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

/// Collect a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// GET request with a session token
pub fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Body-less POST request with a session token
pub fn authed_post(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// DELETE request with a session token
pub fn authed_delete(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// JSON-body request with a session token
pub fn authed_json(
    method: &str,
    uri: &str,
    token: &str,
    body: &serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
