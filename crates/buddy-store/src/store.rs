use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use buddy_core::Companion;

use crate::error::StoreError;

/// Directory created under the home directory (or the working directory as a fallback).
pub const DIR_NAME: &str = ".ccbuddy";
/// The one record file inside the store directory.
pub const FILE_NAME: &str = "buddy.json";

/// The default store directory: `~/.ccbuddy`, or `./.ccbuddy` when the home
/// directory cannot be determined. Never fails.
#[must_use]
pub fn default_dir() -> PathBuf {
    let base = dirs::home_dir().unwrap_or_else(|| {
        tracing::debug!("home directory not found; storing companion under the working directory");
        PathBuf::from(".")
    });
    base.join(DIR_NAME)
}

/// File-backed persistence for exactly one companion.
///
/// The store holds only its location. Companions are copied in on `save` and
/// out on `load`; nothing is cached between calls. Concurrent writers from
/// other processes are not detected: the last rename wins.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Store rooted at an already-resolved directory. The directory is created
    /// lazily on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at [`default_dir`].
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new(default_dir())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the record file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(FILE_NAME)
    }

    /// Validate and persist `companion`, replacing any previous record.
    ///
    /// The record is written to a temporary file in the store directory with
    /// owner-only permissions and renamed over the old one, so a reader sees
    /// either the previous record or the new one.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NilInput`] when no companion is given
    /// - [`StoreError::Validation`] when the companion violates an invariant
    /// - [`StoreError::Io`] for directory creation or write failures
    pub fn save<'a>(&self, companion: impl Into<Option<&'a Companion>>) -> Result<(), StoreError> {
        let companion = companion.into().ok_or(StoreError::NilInput)?;
        companion.validate()?;

        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_vec_pretty(companion).map_err(StoreError::Encode)?;
        let path = self.path();

        let mut tmp = tempfile::Builder::new()
            .prefix(".buddy-")
            .suffix(".tmp")
            .tempfile_in(&self.dir)?;
        tmp.write_all(&json)?;
        tmp.write_all(b"\n")?;
        restrict_to_owner(tmp.path())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;

        tracing::debug!(path = %path.display(), state = %companion.state(), "saved companion");
        Ok(())
    }

    /// Read and validate the stored companion.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] when nothing has been saved yet
    /// - [`StoreError::CorruptRecord`] when the file is not a companion record
    /// - [`StoreError::Validation`] when the record parses but is invalid
    /// - [`StoreError::Io`] for other read failures
    pub fn load(&self) -> Result<Companion, StoreError> {
        let path = self.path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound { path });
            }
            Err(e) => return Err(e.into()),
        };

        let companion: Companion = match serde_json::from_slice(&bytes) {
            Ok(companion) => companion,
            Err(source) => return Err(StoreError::CorruptRecord { path, source }),
        };
        companion.validate()?;

        tracing::debug!(path = %path.display(), state = %companion.state(), "loaded companion");
        Ok(companion)
    }

    /// Whether a record file is confirmed present. Any stat failure counts as absent.
    #[must_use]
    pub fn exists(&self) -> bool {
        fs::metadata(self.path()).is_ok_and(|meta| meta.is_file())
    }

    /// Delete the stored record. Removing an absent record succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be removed.
    pub fn remove(&self) -> Result<(), StoreError> {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed companion record");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn restrict_to_owner(_path: &Path) -> io::Result<()> {
    Ok(())
}
