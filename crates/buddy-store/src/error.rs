use std::path::PathBuf;

use buddy_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// `save` was called without a companion.
    #[error("no companion to save")]
    NilInput,

    /// The companion failed validation before saving or after loading.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record has been saved yet. Expected on first run.
    #[error("no companion record at {}", path.display())]
    NotFound { path: PathBuf },

    /// The record exists but is not a readable companion record.
    #[error("corrupt companion record at {}: {source}", path.display())]
    CorruptRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode companion record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this is the first-run "nothing saved yet" condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
