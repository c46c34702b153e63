use std::sync::Arc;

use sb_auth::{IdentityVerifier, SessionRegistry};
use sb_domain::{AttendanceLedger, BoardService, IdentityResolver, TaskPlanner};
use sb_store::UserStore;

/// Everything a request handler can reach.
///
/// Cloned per request by axum; all members are shared handles.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub resolver: Arc<IdentityResolver>,
    pub ledger: Arc<AttendanceLedger>,
    pub planner: Arc<TaskPlanner>,
    pub board: Arc<BoardService>,
    pub sessions: Arc<SessionRegistry>,
    /// None when neither a JWT secret nor a public key is configured;
    /// token login then answers 401.
    pub verifier: Option<Arc<dyn IdentityVerifier>>,
    pub allow_anonymous: bool,
}
