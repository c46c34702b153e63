use crate::CurrentUser;
use crate::api::extractors::current_user::bearer_token;
use crate::state::AppState;

use sb_auth::SessionRegistry;
use sb_core::{DayBoundary, User};
use sb_domain::{AttendanceLedger, BoardService, IdentityResolver, TaskPlanner};
use sb_store::{MemoryStore, UserStore};

use std::sync::Arc;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{HeaderMap, Request},
};
use uuid::Uuid;

async fn create_test_state() -> AppState {
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
        verifier: None,
        allow_anonymous: true,
    }
}

fn headers_with_auth(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("Authorization", value.parse().unwrap());
    headers
}

#[test]
fn test_bearer_token_missing_header_rejected() {
    let headers = HeaderMap::new();

    assert!(bearer_token(&headers).is_err());
}

#[test]
fn test_bearer_token_wrong_scheme_rejected() {
    let headers = headers_with_auth("Basic dXNlcjpwYXNz");

    assert!(bearer_token(&headers).is_err());
}

#[test]
fn test_bearer_token_not_a_uuid_rejected() {
    let headers = headers_with_auth("Bearer not-a-uuid");

    assert!(bearer_token(&headers).is_err());
}

#[test]
fn test_bearer_token_valid_uuid_extracted() {
    let token = Uuid::new_v4();
    let headers = headers_with_auth(&format!("Bearer {}", token));

    assert_eq!(bearer_token(&headers).unwrap(), token);
}

#[tokio::test]
async fn test_extractor_with_live_session_resolves_user() {
    let state = create_test_state().await;
    let user = User::new("user-1".into(), "Ada".into(), None, None);
    state.users.upsert_user(&user).await.unwrap();
    let session = state.sessions.create(&user.id).await;

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", session.token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap().0.id, "user-1");
}

#[tokio::test]
async fn test_extractor_with_unknown_token_rejected() {
    let state = create_test_state().await;

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_extractor_with_session_for_missing_user_rejected() {
    let state = create_test_state().await;
    // Session exists but the user record was never stored
    let session = state.sessions.create("ghost").await;

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", session.token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}
