use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::render_json;

/// Handle `ccbuddy path`. Printed regardless of `--quiet`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = ctx.store.path();
    match flags.format {
        OutputFormat::Text => println!("{}", path.display()),
        OutputFormat::Json => println!(
            "{}",
            render_json(&serde_json::json!({
                "path": path,
                "exists": ctx.store.exists(),
            }))?
        ),
    }
    Ok(())
}
