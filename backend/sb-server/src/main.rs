pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        anonymous_request::AnonymousRequest,
        auth::{anonymous_login, login, logout, me},
        login_request::LoginRequest,
        session_response::SessionResponse,
        user_dto::UserDto,
    },
    board::{board::get_board, board_dto::BoardDto, column_dto::ColumnDto},
    cards::{
        card_dto::CardDto,
        cards::{create_card, delete_card, get_card, move_card, update_card},
        create_card_request::CreateCardRequest,
        move_card_request::MoveCardRequest,
        update_card_request::UpdateCardRequest,
    },
    check_ins::{
        check_in_dto::CheckInDto,
        check_ins::{create_check_in, list_check_ins},
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    tasks::{
        create_task_request::CreateTaskRequest,
        task_dto::TaskDto,
        tasks::{create_task, delete_task, list_tasks},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

use sb_auth::{IdentityVerifier, JwtVerifier, SessionRegistry};
use sb_config::StorageBackend;
use sb_domain::{AttendanceLedger, BoardService, IdentityResolver, TaskPlanner};
use sb_store::{BoardStore, JsonFileStore, LedgerStore, MemoryStore, TaskStore, UserStore};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env before config resolution (development convenience)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = sb_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = sb_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Construct the backing store; every contract is served by one document
    let (users, ledger_store, task_store, board_store): (
        Arc<dyn UserStore>,
        Arc<dyn LedgerStore>,
        Arc<dyn TaskStore>,
        Arc<dyn BoardStore>,
    ) = match config.storage.backend {
        StorageBackend::Memory => {
            let store = Arc::new(MemoryStore::new());
            (store.clone(), store.clone(), store.clone(), store)
        }
        StorageBackend::File => {
            let path = config.store_path()?;
            info!("Opening store file: {}", path.display());
            let store = Arc::new(JsonFileStore::open(path).await?);
            (store.clone(), store.clone(), store.clone(), store)
        }
    };

    // Create JWT verifier (optional; anonymous sign-in may be the only path)
    let verifier: Option<Arc<dyn IdentityVerifier>> =
        if let Some(ref secret) = config.auth.jwt_secret {
            info!("JWT: HS256 id-token verification enabled");
            Some(Arc::new(JwtVerifier::with_hs256(secret.as_bytes())))
        } else if let Some(key_path) = config.jwt_public_key_path()? {
            let public_key = std::fs::read_to_string(&key_path).map_err(|e| {
                error::ServerError::JwtKeyFile {
                    path: key_path.display().to_string(),
                    source: e,
                }
            })?;
            info!("JWT: RS256 id-token verification enabled");
            Some(Arc::new(JwtVerifier::with_rs256(&public_key)?))
        } else {
            warn!("No JWT key configured - token sign-in disabled, anonymous only");
            None
        };

    // Domain services. Opening the board seeds it when the store is empty;
    // this runs before the listener binds, so seeding can never race.
    let resolver = Arc::new(IdentityResolver::new(users.clone()));
    let ledger = Arc::new(AttendanceLedger::new(
        ledger_store,
        config.attendance.day_boundary,
    ));
    let planner = Arc::new(TaskPlanner::new(task_store));
    let board = Arc::new(BoardService::open(board_store).await?);
    let sessions = Arc::new(SessionRegistry::new(config.auth.session_ttl_secs));

    // Build application state
    let app_state = AppState {
        users,
        resolver,
        ledger,
        planner,
        board,
        sessions: sessions.clone(),
        verifier,
        allow_anonymous: config.auth.allow_anonymous,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Periodically reclaim expired sessions
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        interval.tick().await; // first tick completes immediately
        loop {
            interval.tick().await;
            sessions.sweep().await;
        }
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}
