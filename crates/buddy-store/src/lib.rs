//! # buddy-store
//!
//! Durable persistence of the single ccbuddy companion as a JSON file.
//!
//! ```text
//! ~/.ccbuddy/buddy.json
//! {
//!   "state": "egg",
//!   "health": 100,
//!   "created_at": "2025-06-01T10:00:00Z",
//!   "last_fed_at": "2025-06-01T10:00:00Z"
//! }
//! ```
//!
//! The record is validated on the way in and on the way out, written with
//! owner-only permissions, and replaced atomically by rename.

mod error;
mod store;

pub use error::StoreError;
pub use store::{DIR_NAME, FILE_NAME, Store, default_dir};
