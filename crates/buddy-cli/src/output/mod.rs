use buddy_core::{Companion, CompanionSnapshot};
use chrono::Utc;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};

pub mod text;

/// Render a serializable response as pretty JSON.
pub fn render_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render the companion as of now in the requested format.
pub fn render_companion(companion: &Companion, format: OutputFormat) -> anyhow::Result<String> {
    let snapshot: CompanionSnapshot = companion.snapshot_at(Utc::now());
    match format {
        OutputFormat::Json => render_json(&snapshot),
        OutputFormat::Text => Ok(text::render_snapshot(&snapshot)),
    }
}

/// Print the companion in the requested format.
pub fn output_companion(companion: &Companion, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_companion(companion, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a one-line notice, or a `{"message": ...}` object in JSON mode.
/// Text notices are suppressed by `--quiet`.
pub fn notice(message: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Text if flags.quiet => {}
        OutputFormat::Text => println!("{message}"),
        OutputFormat::Json => {
            println!("{}", render_json(&serde_json::json!({ "message": message }))?);
        }
    }
    Ok(())
}
