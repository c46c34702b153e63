//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::state::AppState;

use sb_core::User;

use std::future::Future;
use std::panic::Location;
use std::str::FromStr;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// The signed-in user behind the request's bearer token.
///
/// Resolution: `Authorization: Bearer <token>` header, token to live
/// session, session to stored user. Any break in that chain is a 401.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(&parts.headers)?;

            let session = state
                .sessions
                .resolve(token)
                .await
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "Session expired or unknown".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let user = state
                .users
                .find_user(&session.user_id)
                .await?
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "Session user no longer exists".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            Ok(CurrentUser(user))
        }
    }
}

/// Pull the session token out of the Authorization header.
#[track_caller]
pub fn bearer_token(headers: &HeaderMap) -> Result<Uuid, ApiError> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized {
            message: "Missing Authorization header".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let raw = header_value.to_str().map_err(|_| ApiError::Unauthorized {
        message: "Malformed Authorization header".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = raw
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized {
            message: "Expected 'Bearer' authorization scheme".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Uuid::from_str(token.trim()).map_err(|_| ApiError::Unauthorized {
        message: "Malformed session token".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
