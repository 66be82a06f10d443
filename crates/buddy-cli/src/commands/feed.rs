use buddy_core::Companion;
use buddy_store::Store;

use crate::cli::GlobalFlags;
use crate::commands::shared::{persist, require_companion};
use crate::context::AppContext;
use crate::output::output_companion;

/// Handle `ccbuddy feed`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let companion = run(&ctx.store)?;
    output_companion(&companion, flags.format)
}

pub fn run(store: &Store) -> anyhow::Result<Companion> {
    let mut companion = require_companion(store)?;
    companion.feed();
    persist(store, &companion)?;
    Ok(companion)
}
