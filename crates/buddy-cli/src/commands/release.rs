use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::notice;

/// Handle `ccbuddy release`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.store.exists() {
        return notice("No companion to release.", flags);
    }
    ctx.store
        .remove()
        .with_context(|| format!("failed to remove {}", ctx.store.path().display()))?;
    notice("Your companion has been released. Goodbye!", flags)
}
