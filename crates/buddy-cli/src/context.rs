use std::path::PathBuf;

use buddy_config::BuddyConfig;
use buddy_store::Store;

use crate::cli::GlobalFlags;

/// Everything a command handler needs, resolved once per invocation.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub store: Store,
}

impl AppContext {
    /// Resolve the store directory: `--data-dir`, then configuration, then `~/.ccbuddy`.
    #[must_use]
    pub fn init(flags: &GlobalFlags, config: &BuddyConfig) -> Self {
        let dir = resolve_store_dir(flags, config);
        tracing::debug!(dir = %dir.display(), "resolved companion store");
        Self {
            store: Store::new(dir),
        }
    }
}

fn resolve_store_dir(flags: &GlobalFlags, config: &BuddyConfig) -> PathBuf {
    flags
        .data_dir
        .clone()
        .unwrap_or_else(|| config.store.resolve_dir())
}
