//! Companion store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding `buddy.json`. Empty means `~/.ccbuddy`.
    #[serde(default)]
    pub dir: String,
}

impl StoreConfig {
    #[must_use]
    pub fn is_overridden(&self) -> bool {
        !self.dir.trim().is_empty()
    }

    /// The directory the store should use, resolved once.
    ///
    /// Falls back to [`buddy_store::default_dir`] when no override is set,
    /// which itself degrades to the working directory without a home directory.
    #[must_use]
    pub fn resolve_dir(&self) -> PathBuf {
        if self.is_overridden() {
            PathBuf::from(self.dir.trim())
        } else {
            buddy_store::default_dir()
        }
    }
}
