//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.piggy/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".piggy")
    }

    /// Get the global config file path (~/.piggy/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load the global config, creating a default one on first run.
    ///
    /// Every command goes through here unless --config names a file, so a
    /// fresh install gets its ~/.piggy/config.toml the first time any
    /// command runs.
    pub fn load() -> Result<Self> {
        let path = Self::global_config_path();

        if !path.exists() {
            Self::auto_init()?;
        }

        Self::from_file(&path)
    }

    /// Auto-initialize global configuration when no config exists.
    ///
    /// Uses file locking to prevent race conditions when two invocations
    /// try to auto-init simultaneously. The write itself is atomic: temp
    /// file plus rename, so a crash never leaves a half-written config.
    fn auto_init() -> Result<()> {
        let config_dir = Self::global_config_dir();
        let config_path = Self::global_config_path();

        std::fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                config_dir.display()
            )
        })?;

        // Lock file is separate from the config so the rename below does
        // not swap it out from under us
        let lock_path = config_path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .context("Failed to acquire config lock for auto-init")?;

        // Re-check after acquiring the lock, another process may have won
        if config_path.exists() {
            return Ok(());
        }

        let content =
            toml::to_string_pretty(&Config::default()).context("Failed to serialize config")?;

        let temp_path = config_path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .context("Failed to write config content")?;

        temp_file.sync_all().context("Failed to sync config file")?;

        std::fs::rename(&temp_path, &config_path)
            .with_context(|| format!("Failed to rename config file: {}", config_path.display()))?;

        eprintln!("Created {}", config_path.display());
        Ok(())
    }
}
