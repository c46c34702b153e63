//! Attendance check-in handlers

use crate::{ApiResult, CheckInDto, CurrentUser};
use crate::state::AppState;

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/check-ins
///
/// Record today's check-in for the caller. At most one per calendar day;
/// a second attempt answers 409.
pub async fn create_check_in(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<(StatusCode, Json<CheckInDto>)> {
    let check_in = state.ledger.record_check_in(&user, Utc::now()).await?;

    Ok((StatusCode::CREATED, Json(check_in.into())))
}

/// GET /api/v1/check-ins
///
/// The caller's check-ins, newest first.
pub async fn list_check_ins(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<CheckInDto>>> {
    let check_ins = state.ledger.list_check_ins(&user.id).await?;

    Ok(Json(check_ins.into_iter().map(CheckInDto::from).collect()))
}
