//! Shared board read handler

use crate::{ApiResult, BoardDto, CurrentUser};
use crate::state::AppState;

use axum::{Json, extract::State};

/// GET /api/v1/board
///
/// Snapshot of the shared board.
pub async fn get_board(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<BoardDto>> {
    let board = state.board.board().await;

    Ok(Json(board.into()))
}
