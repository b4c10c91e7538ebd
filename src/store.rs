//! State file I/O
//!
//! The whole progress record lives in one JSON file, read once at startup
//! and rewritten after every mutation. Reading distinguishes three cases:
//! a good file, no file, and a corrupt file. Corruption is never papered
//! over with defaults; it is reported so the user can fix or reset.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::ProgressState;

/// File name inside the data directory
pub const STATE_FILE: &str = "state.json";

/// Error type for state file operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read state file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("State file {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("Failed to write state file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode state: {0}")]
    Encode(serde_json::Error),
}

/// Result of reading the state file
#[derive(Debug)]
pub enum LoadOutcome {
    /// A well-formed state file existed and was parsed
    Loaded(ProgressState),
    /// No state file yet
    Missing,
}

/// Reads and writes the state file in one directory
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store backed by `<dir>/state.json`
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(STATE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the state file.
    ///
    /// A missing file is a normal outcome (fresh install). Unreadable,
    /// unparseable, or out-of-range contents are errors.
    pub fn load(&self) -> Result<LoadOutcome, StoreError> {
        if !self.path.exists() {
            return Ok(LoadOutcome::Missing);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        let state: ProgressState =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        state.validate().map_err(|reason| StoreError::Corrupt {
            path: self.path.clone(),
            reason,
        })?;

        Ok(LoadOutcome::Loaded(state))
    }

    /// Load the saved state, or defaults when no file exists yet.
    ///
    /// Corruption still propagates: callers decide between editing the
    /// file by hand and `piggy reset --force`.
    pub fn load_or_default(&self) -> Result<ProgressState, StoreError> {
        Ok(match self.load()? {
            LoadOutcome::Loaded(state) => state,
            LoadOutcome::Missing => ProgressState::default(),
        })
    }

    /// Save the state with file locking and an atomic rename.
    ///
    /// 1. Exclusive lock prevents two piggy processes writing at once
    /// 2. Temp file + rename prevents a half-written file on crash
    /// 3. Parent directory is created if needed
    pub fn save(&self, state: &ProgressState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(state).map_err(StoreError::Encode)?;

        // Lock file is separate from the state file so the rename below
        // does not swap the lock out from under us
        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| StoreError::Write {
                path: lock_path.clone(),
                source: e,
            })?;

        lock_file.lock_exclusive().map_err(|e| StoreError::Write {
            path: lock_path.clone(),
            source: e,
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StoreError::Write {
                path: temp_path.clone(),
                source: e,
            })?;

        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.sync_all())
            .map_err(|e| StoreError::Write {
                path: temp_path.clone(),
                source: e,
            })?;

        // Atomic rename, overwrites any existing file
        std::fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        // Lock released when lock_file drops
        Ok(())
    }

    /// Delete the state file. Succeeds if it was already gone.
    pub fn remove(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
