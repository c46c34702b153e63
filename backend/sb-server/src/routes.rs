use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Sessions
        .route("/api/v1/auth/login", post(crate::login))
        .route("/api/v1/auth/anonymous", post(crate::anonymous_login))
        .route("/api/v1/auth/logout", post(crate::logout))
        .route("/api/v1/me", get(crate::me))
        // Attendance ledger
        .route(
            "/api/v1/check-ins",
            post(crate::create_check_in).get(crate::list_check_ins),
        )
        // Tasks
        .route(
            "/api/v1/tasks",
            get(crate::list_tasks).post(crate::create_task),
        )
        .route("/api/v1/tasks/{id}", delete(crate::delete_task))
        // Board and cards
        .route("/api/v1/board", get(crate::get_board))
        .route("/api/v1/cards", post(crate::create_card))
        .route(
            "/api/v1/cards/{id}",
            get(crate::get_card)
                .put(crate::update_card)
                .delete(crate::delete_card),
        )
        .route("/api/v1/cards/{id}/move", put(crate::move_card))
        // Add shared state
        .with_state(state)
        // CORS middleware (browser clients may live on another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
