use anyhow::Context;
use buddy_core::Companion;
use buddy_store::Store;

use crate::cli::GlobalFlags;
use crate::commands::shared::{persist, require_companion};
use crate::context::AppContext;
use crate::output::output_companion;

/// Handle `ccbuddy hatch`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let companion = run(&ctx.store)?;
    output_companion(&companion, flags.format)
}

/// Hatch and save. A failed transition leaves the stored record untouched.
pub fn run(store: &Store) -> anyhow::Result<Companion> {
    let mut companion = require_companion(store)?;
    companion.hatch().context("cannot hatch")?;
    persist(store, &companion)?;
    Ok(companion)
}
