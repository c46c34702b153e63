//! Per-user task list handlers

use crate::{ApiResult, CreateTaskRequest, CurrentUser, TaskDto};
use crate::state::AppState;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/tasks
///
/// The caller's tasks, insertion order.
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<TaskDto>>> {
    let tasks = state.planner.list_tasks(&user.id).await?;

    Ok(Json(tasks.into_iter().map(TaskDto::from).collect()))
}

/// POST /api/v1/tasks
///
/// Add a task for the caller. Blank titles are rejected.
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskDto>)> {
    let task = state.planner.add_task(&user.id, &req.title).await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// DELETE /api/v1/tasks/{id}
///
/// Delete the caller's task. Someone else's task looks exactly like a
/// missing one: 404 either way.
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let task_id = Uuid::parse_str(&id)?;

    state.planner.delete_task(&user.id, task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
