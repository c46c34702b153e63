//! Card REST API handlers
//!
//! Cards live inside the single shared board; every mutation here goes
//! through [`BoardService`](sb_domain::BoardService), which serializes
//! writes and persists before publishing.

use crate::{
    ApiResult, BoardDto, CardDto, CreateCardRequest, CurrentUser, DeleteResponse, MoveCardRequest,
    UpdateCardRequest,
};
use crate::state::AppState;

use sb_domain::CardPatch;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/cards
///
/// Append a card to the end of a column. Blank text is rejected; the new
/// card starts with an empty description.
pub async fn create_card(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(req): Json<CreateCardRequest>,
) -> ApiResult<(StatusCode, Json<CardDto>)> {
    let column_id = Uuid::parse_str(&req.column_id)?;

    let card = state.board.add_card(column_id, &req.text).await?;

    Ok((StatusCode::CREATED, Json(card.into())))
}

/// GET /api/v1/cards/{id}
pub async fn get_card(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<CardDto>> {
    let card_id = Uuid::parse_str(&id)?;

    let card = state.board.card(card_id).await?;

    Ok(Json(card.into()))
}

/// PUT /api/v1/cards/{id}
///
/// Partial update: only the fields present in the body change. Placement
/// never changes here; that is the move endpoint's job.
pub async fn update_card(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateCardRequest>,
) -> ApiResult<Json<CardDto>> {
    let card_id = Uuid::parse_str(&id)?;

    let patch = CardPatch {
        text: req.text,
        description: req.description,
    };
    let card = state.board.update_card(card_id, patch).await?;

    Ok(Json(card.into()))
}

/// DELETE /api/v1/cards/{id}
///
/// Remove the card from whichever column currently holds it.
pub async fn delete_card(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let card_id = Uuid::parse_str(&id)?;

    state.board.delete_card(card_id).await?;

    Ok(Json(DeleteResponse {
        deleted_id: card_id,
    }))
}

/// PUT /api/v1/cards/{id}/move
///
/// Move the card to a column/position. Answers with the whole board so the
/// client can redraw from the authoritative ordering.
pub async fn move_card(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<MoveCardRequest>,
) -> ApiResult<Json<BoardDto>> {
    let card_id = Uuid::parse_str(&id)?;
    let dest_column_id = Uuid::parse_str(&req.new_column_id)?;

    // Negative indices clamp to the front; the service clamps the far end.
    let dest_index = req.new_index.max(0) as usize;

    let board = state.board.move_card(card_id, dest_column_id, dest_index).await?;

    Ok(Json(board.into()))
}
