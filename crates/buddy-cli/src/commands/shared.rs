use anyhow::Context;
use buddy_core::Companion;
use buddy_store::{Store, StoreError};

/// Load the companion, turning the first-run case into an actionable message.
pub fn require_companion(store: &Store) -> anyhow::Result<Companion> {
    match store.load() {
        Ok(companion) => Ok(companion),
        Err(StoreError::NotFound { .. }) => {
            anyhow::bail!("no companion yet. Run 'ccbuddy new' to get an egg.")
        }
        Err(error) => Err(error).context("failed to load companion"),
    }
}

/// Persist after a mutation.
pub fn persist(store: &Store, companion: &Companion) -> anyhow::Result<()> {
    store
        .save(companion)
        .with_context(|| format!("failed to save companion to {}", store.path().display()))
}
