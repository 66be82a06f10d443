use anyhow::Context;
use buddy_core::Companion;
use buddy_store::{Store, StoreError};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{notice, output_companion};

/// Handle `ccbuddy status`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match run(&ctx.store)? {
        Some(companion) => output_companion(&companion, flags.format),
        None => notice(
            "No companion found. Run 'ccbuddy new' to get an egg.",
            flags,
        ),
    }
}

/// Load the companion if one has been saved.
pub fn run(store: &Store) -> anyhow::Result<Option<Companion>> {
    match store.load() {
        Ok(companion) => Ok(Some(companion)),
        Err(StoreError::NotFound { .. }) => Ok(None),
        Err(error) => Err(error).context("failed to load companion"),
    }
}
