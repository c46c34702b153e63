//! Sign-in, sign-out, and current-user handlers
//!
//! Credential verification is delegated to the configured
//! [`IdentityVerifier`](sb_auth::IdentityVerifier); these handlers bind the
//! resolved user to an in-process session token.

use crate::{
    AnonymousRequest, ApiError, ApiResult, CurrentUser, LoginRequest, SessionResponse, UserDto,
};
use crate::api::extractors::current_user::bearer_token;
use crate::state::AppState;

use sb_domain::CredentialProof;

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/login
///
/// Exchange a verified identity token for a session.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let verifier = state.verifier.as_ref().ok_or_else(|| ApiError::Unauthorized {
        message: "Token sign-in is not configured".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let identity = verifier.verify(&req.id_token).await?;
    let user = state.resolver.resolve(CredentialProof::Token(identity)).await?;
    let session = state.sessions.create(&user.id).await;

    Ok(Json(SessionResponse {
        token: session.token,
        user: user.into(),
    }))
}

/// POST /api/v1/auth/anonymous
///
/// Mint a throwaway guest identity and session. Body is optional.
pub async fn anonymous_login(
    State(state): State<AppState>,
    req: Option<Json<AnonymousRequest>>,
) -> ApiResult<Json<SessionResponse>> {
    if !state.allow_anonymous {
        return Err(ApiError::Unauthorized {
            message: "Anonymous sign-in is disabled".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let display_name = req.and_then(|Json(r)| r.display_name);
    let user = state
        .resolver
        .resolve(CredentialProof::Anonymous { display_name })
        .await?;
    let session = state.sessions.create(&user.id).await;

    Ok(Json(SessionResponse {
        token: session.token,
        user: user.into(),
    }))
}

/// POST /api/v1/auth/logout
///
/// Revoke the caller's session token. Revoking an already-dead session is
/// still a 204.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<StatusCode> {
    let token = bearer_token(&headers)?;
    state.sessions.revoke(token).await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/me
///
/// The user behind the presented session token.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserDto> {
    Json(user.into())
}
