//! # buddy-core
//!
//! The companion entity and its lifecycle for ccbuddy.
//!
//! - [`Companion`]: state, health, and timestamps with the hatch/feed mutators
//! - [`LifecycleState`]: `egg → hatched`, with an unrecognized arm for bad records
//! - [`ValidationError`] / [`CoreError`]: invariant and transition failures
//! - [`CompanionSnapshot`]: read-only view for rendering
//!
//! This crate performs no I/O. Persistence lives in `buddy-store`.

pub mod companion;
pub mod error;
pub mod snapshot;
pub mod state;

pub use companion::{Companion, MAX_HEALTH};
pub use error::{CoreError, ValidationError};
pub use snapshot::CompanionSnapshot;
pub use state::LifecycleState;
