use crate::Session;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{debug, info};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Registry for tracking live sessions.
///
/// In-process only: a restart signs everyone out. Expired entries answer
/// [`resolve`](Self::resolve) with `None` immediately and are reclaimed by
/// the periodic [`sweep`](Self::sweep).
pub struct SessionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    ttl: Duration,
}

struct RegistryInner {
    /// All live sessions by bearer token
    sessions: HashMap<Uuid, Session>,
}

impl SessionRegistry {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                sessions: HashMap::new(),
            })),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Mint a session for `user_id` and register it.
    pub async fn create(&self, user_id: &str) -> Session {
        let session = Session {
            token: Uuid::new_v4(),
            user_id: user_id.to_string(),
            expires_at: Utc::now() + self.ttl,
        };

        let mut inner = self.inner.write().await;
        inner.sessions.insert(session.token, session.clone());

        info!(
            "Session created for user {} (total: {})",
            user_id,
            inner.sessions.len()
        );

        session
    }

    /// Look up a live session. Expired sessions are as good as absent.
    pub async fn resolve(&self, token: Uuid) -> Option<Session> {
        let inner = self.inner.read().await;
        inner
            .sessions
            .get(&token)
            .filter(|s| !s.is_expired(Utc::now()))
            .cloned()
    }

    /// Drop the session; returns false when the token was not registered.
    pub async fn revoke(&self, token: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        match inner.sessions.remove(&token) {
            Some(session) => {
                info!("Session revoked for user {}", session.user_id);
                true
            }
            None => false,
        }
    }

    /// Remove expired sessions, returning how many were reclaimed.
    pub async fn sweep(&self) -> usize {
        let now = Utc::now();
        let mut inner = self.inner.write().await;

        let before = inner.sessions.len();
        inner.sessions.retain(|_, s| !s.is_expired(now));
        let swept = before - inner.sessions.len();

        if swept > 0 {
            debug!("Swept {} expired sessions ({} live)", swept, inner.sessions.len());
        }

        swept
    }

    pub async fn active_count(&self) -> usize {
        self.inner.read().await.sessions.len()
    }
}
