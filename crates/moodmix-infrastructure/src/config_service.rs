//! Loads `config.toml`, writing the defaults back on first run.

use crate::paths::{MoodmixPaths, ServiceType};
use crate::storage::{AtomicFile, FileFormat};
use moodmix_core::config::AppConfig;
use moodmix_core::{MoodError, Result};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches [`AppConfig`].
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicFile<AppConfig>>,
    cached: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = MoodmixPaths::new(base_path)
            .get_path(ServiceType::Config)
            .map_err(|e| MoodError::config(format!("Failed to get config path: {}", e)))?;

        Ok(Self {
            file: Arc::new(AtomicFile::new(path, FileFormat::Toml)),
            cached: Arc::new(RwLock::new(None)),
        })
    }

    /// Returns the configuration, reading the file on first access.
    ///
    /// A missing file is created with defaults. A file that exists but does
    /// not parse is an error rather than being silently replaced.
    pub fn get_config(&self) -> Result<AppConfig> {
        if let Some(cached) = self.read_cache() {
            return Ok(cached);
        }

        let config = match self.file.load()? {
            Some(config) => config,
            None => {
                let defaults = AppConfig::default();
                self.file.save(&defaults)?;
                tracing::info!(
                    "[Config] Wrote default configuration to {}",
                    self.file.path().display()
                );
                defaults
            }
        };

        let mut cache = self.cached.write().unwrap_or_else(|e| e.into_inner());
        *cache = Some(config.clone());
        Ok(config)
    }

    /// Forces the next [`get_config`](Self::get_config) to hit the disk.
    pub fn invalidate_cache(&self) {
        let mut cache = self.cached.write().unwrap_or_else(|e| e.into_inner());
        *cache = None;
    }

    fn read_cache(&self) -> Option<AppConfig> {
        self.cached
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodmix_core::Language;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();

        let config = service.get_config().unwrap();

        assert_eq!(config, AppConfig::default());
        let written = fs::read_to_string(temp_dir.path().join("config.toml")).unwrap();
        assert!(written.contains("fade_out_ms = 500"));
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_the_rest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.toml"),
            "default_language = \"zh\"\n[transition]\nfade_in_ms = 50\n",
        )
        .unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();

        let config = service.get_config().unwrap();

        assert_eq!(config.default_language, Language::Zh);
        assert_eq!(config.transition.fade_in_ms, 50);
        assert_eq!(config.transition.fade_out_ms, 500);
    }

    #[test]
    fn test_broken_file_is_an_error_and_left_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[transition\n").unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();

        assert!(service.get_config().unwrap_err().is_serialization());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[transition\n");
    }

    #[test]
    fn test_cache_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(Some(temp_dir.path())).unwrap();
        assert_eq!(service.get_config().unwrap().default_language, Language::En);

        fs::write(temp_dir.path().join("config.toml"), "default_language = \"zh\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().default_language, Language::En);

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().default_language, Language::Zh);
    }
}
