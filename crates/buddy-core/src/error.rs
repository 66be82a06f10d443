//! Error types for companion lifecycle operations.
//!
//! Persistence errors live in `buddy-store`, which wraps [`ValidationError`]
//! unchanged so callers can match on the violated invariant in both directions.

use thiserror::Error;

use crate::state::LifecycleState;

/// Errors raised by companion mutators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A lifecycle transition was attempted that is not allowed.
    #[error("Invalid state transition: companion from {from} to {to}")]
    InvalidTransition {
        from: LifecycleState,
        to: LifecycleState,
    },

    /// The companion violates one of its invariants.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The first companion invariant found to be violated, in check order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Validation error: unknown lifecycle state '{0}'")]
    UnknownState(String),

    #[error("Validation error: health {0} is outside 0-100")]
    HealthOutOfRange(i32),

    #[error("Validation error: created_at is not set")]
    MissingCreatedAt,

    #[error("Validation error: last_fed_at is not set")]
    MissingLastFedAt,
}
