use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::snapshot::CompanionSnapshot;
use crate::state::LifecycleState;

/// Full health, restored by every feeding.
pub const MAX_HEALTH: i32 = 100;

/// The virtual pet. Created as an egg with full health, hatched once, fed on
/// demand. Health never changes on its own; decay is a caller's policy.
///
/// The serialized form is the persisted record: `state`, `health`,
/// `created_at`, `last_fed_at`. A missing `health` fails the parse; a missing
/// state or timestamp deserializes to a value that fails [`Companion::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Companion {
    #[serde(default = "missing_state")]
    state: LifecycleState,
    health: i32,
    #[serde(default)]
    created_at: DateTime<Utc>,
    #[serde(default)]
    last_fed_at: DateTime<Utc>,
}

fn missing_state() -> LifecycleState {
    LifecycleState::Unrecognized(String::new())
}

/// Timestamps at or before the Unix epoch count as never set.
fn is_unset(ts: &DateTime<Utc>) -> bool {
    ts.timestamp() <= 0
}

impl Companion {
    /// A fresh egg with full health, created and fed now.
    #[must_use]
    pub fn new() -> Self {
        Self::new_at(Utc::now())
    }

    #[must_use]
    pub const fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            state: LifecycleState::Egg,
            health: MAX_HEALTH,
            created_at: now,
            last_fed_at: now,
        }
    }

    /// Assemble a companion from raw parts without checking invariants.
    ///
    /// Call [`Companion::validate`] before trusting the result.
    #[must_use]
    pub const fn from_parts(
        state: LifecycleState,
        health: i32,
        created_at: DateTime<Utc>,
        last_fed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            state,
            health,
            created_at,
            last_fed_at,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LifecycleState {
        &self.state
    }

    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn last_fed_at(&self) -> DateTime<Utc> {
        self.last_fed_at
    }

    /// Egg → hatched. Leaves the companion untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless the companion is an egg.
    pub fn hatch(&mut self) -> Result<(), CoreError> {
        let to = LifecycleState::Hatched;
        if !self.state.can_transition_to(&to) {
            return Err(CoreError::InvalidTransition {
                from: self.state.clone(),
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Restore full health and record the feeding time.
    pub fn feed(&mut self) {
        self.feed_at(Utc::now());
    }

    pub const fn feed_at(&mut self, now: DateTime<Utc>) {
        self.health = MAX_HEALTH;
        self.last_fed_at = now;
    }

    /// Time elapsed since creation, by the wall clock.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.age_at(Utc::now())
    }

    /// Time elapsed since creation as of `now`. Zero if `now` precedes it.
    #[must_use]
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        (now - self.created_at).max(Duration::zero())
    }

    /// Time elapsed since the last feeding as of `now`. Zero if `now` precedes it.
    #[must_use]
    pub fn since_fed_at(&self, now: DateTime<Utc>) -> Duration {
        (now - self.last_fed_at).max(Duration::zero())
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Check the invariants in order and report the first one violated:
    /// state membership, health range, `created_at`, `last_fed_at`.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] naming the first violated invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.state.is_recognized() {
            return Err(ValidationError::UnknownState(self.state.to_string()));
        }
        if !(0..=MAX_HEALTH).contains(&self.health) {
            return Err(ValidationError::HealthOutOfRange(self.health));
        }
        if is_unset(&self.created_at) {
            return Err(ValidationError::MissingCreatedAt);
        }
        if is_unset(&self.last_fed_at) {
            return Err(ValidationError::MissingLastFedAt);
        }
        Ok(())
    }

    /// Read-only view for display, computed as of `now`.
    #[must_use]
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> CompanionSnapshot {
        CompanionSnapshot {
            state: self.state.clone(),
            health: self.health,
            alive: self.is_alive(),
            age_secs: self.age_at(now).num_seconds(),
            since_fed_secs: self.since_fed_at(now).num_seconds(),
            created_at: self.created_at,
            last_fed_at: self.last_fed_at,
        }
    }
}

impl Default for Companion {
    fn default() -> Self {
        Self::new()
    }
}
