use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::LifecycleState;

/// Point-in-time, read-only view of a companion handed to display code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanionSnapshot {
    pub state: LifecycleState,
    pub health: i32,
    pub alive: bool,
    /// Seconds since creation.
    pub age_secs: i64,
    /// Seconds since the last feeding.
    pub since_fed_secs: i64,
    pub created_at: DateTime<Utc>,
    pub last_fed_at: DateTime<Utc>,
}
