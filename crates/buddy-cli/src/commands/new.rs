use anyhow::bail;
use buddy_core::Companion;
use buddy_store::Store;

use crate::cli::{GlobalFlags, NewArgs};
use crate::commands::shared::persist;
use crate::context::AppContext;
use crate::output::output_companion;

/// Handle `ccbuddy new`.
pub fn handle(args: &NewArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let companion = run(&ctx.store, args.force)?;
    output_companion(&companion, flags.format)
}

/// Create and save a fresh egg unless one already exists.
pub fn run(store: &Store, force: bool) -> anyhow::Result<Companion> {
    if store.exists() && !force {
        bail!(
            "a companion already lives at {}. Use 'ccbuddy new --force' to replace it.",
            store.path().display()
        );
    }
    let companion = Companion::new();
    persist(store, &companion)?;
    tracing::info!(path = %store.path().display(), "created companion");
    Ok(companion)
}
