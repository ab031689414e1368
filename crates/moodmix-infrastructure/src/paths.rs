//! Unified path management for moodmix files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/moodmix/           # Config directory (or an explicit base path)
//! ├── config.toml              # Application configuration
//! ├── secret.json              # API keys
//! └── history.json             # Cocktail history, newest first
//! ```

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "moodmix";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Files managed by moodmix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    Secret,
    History,
}

impl ServiceType {
    fn file_name(self) -> &'static str {
        match self {
            ServiceType::Config => "config.toml",
            ServiceType::Secret => "secret.json",
            ServiceType::History => "history.json",
        }
    }
}

/// Resolves moodmix file locations, optionally under a custom base directory
/// (used by tests and the CLI's `--config-dir`).
#[derive(Debug, Clone, Default)]
pub struct MoodmixPaths {
    base_path: Option<PathBuf>,
}

impl MoodmixPaths {
    pub fn new(base_path: Option<&Path>) -> Self {
        Self {
            base_path: base_path.map(Path::to_path_buf),
        }
    }

    /// Returns the moodmix configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: the base path if one was given, else `~/.config/moodmix/`
    /// - `Err(PathError::ConfigDirNotFound)`: no base path and no platform config dir
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_path {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(service.file_name()))
    }
}
