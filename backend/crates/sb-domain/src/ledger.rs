use crate::Result;
use crate::error::DomainError;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;
use sb_core::{CheckIn, DayBoundary, User};
use sb_store::LedgerStore;
use tokio::sync::Mutex;

/// The attendance ledger: at most one check-in per user per calendar day.
///
/// The day is derived through the injected [`DayBoundary`]. Check-then-append
/// runs under a per-user lock so two simultaneous requests from the same user
/// cannot both pass the duplicate check; different users never contend.
pub struct AttendanceLedger {
    store: Arc<dyn LedgerStore>,
    day_boundary: DayBoundary,
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl AttendanceLedger {
    pub fn new(store: Arc<dyn LedgerStore>, day_boundary: DayBoundary) -> Self {
        Self {
            store,
            day_boundary,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Record a check-in for `user` at `now`.
    ///
    /// The caller supplies the timestamp, which keeps "today" out of this
    /// function and makes the invariant testable at fixed instants.
    pub async fn record_check_in(&self, user: &User, now: DateTime<Utc>) -> Result<CheckIn> {
        let lock = self.user_lock(&user.id).await;
        let _guard = lock.lock().await;

        let today = self.day_boundary.date_key(now);

        let existing = self.store.check_ins_for_user(&user.id).await?;
        if existing
            .iter()
            .any(|c| self.day_boundary.date_key(c.timestamp) == today)
        {
            return Err(DomainError::already_checked_in(today));
        }

        let check_in = CheckIn::new(user.id.clone(), user.display_name.clone(), now);
        self.store.append_check_in(&check_in).await?;

        info!("Check-in recorded for {} on {}", user.id, today);
        Ok(check_in)
    }

    /// The user's check-ins, newest first. Equal timestamps keep their
    /// insertion order.
    pub async fn list_check_ins(&self, user_id: &str) -> Result<Vec<CheckIn>> {
        let mut check_ins = self.store.check_ins_for_user(user_id).await?;
        check_ins.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(check_ins)
    }

    async fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
