//! API key lookup: environment first, then `secret.json`.

use crate::paths::{MoodmixPaths, ServiceType};
use crate::storage::{AtomicFile, FileFormat};
use moodmix_core::config::{GeminiConfig, SecretConfig};
use moodmix_core::{MoodError, Result};
use std::path::Path;

/// Environment variables checked for a Gemini key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub struct SecretService {
    file: AtomicFile<SecretConfig>,
}

impl SecretService {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = MoodmixPaths::new(base_path)
            .get_path(ServiceType::Secret)
            .map_err(|e| MoodError::config(format!("Failed to get secret path: {}", e)))?;

        Ok(Self {
            file: AtomicFile::new(path, FileFormat::Json),
        })
    }

    /// Reads `secret.json`; a missing file yields an empty config.
    pub fn load_secrets(&self) -> Result<SecretConfig> {
        Ok(self.file.load()?.unwrap_or_default())
    }

    /// Resolves the Gemini key from the process environment or the file.
    pub fn gemini_api_key(&self) -> Result<Option<String>> {
        let from_env = API_KEY_ENV_VARS
            .iter()
            .find_map(|name| std::env::var(name).ok());
        self.gemini_api_key_with(from_env)
    }

    /// Like [`gemini_api_key`](Self::gemini_api_key) with the environment
    /// value passed in. Blank values count as absent.
    pub fn gemini_api_key_with(&self, env_value: Option<String>) -> Result<Option<String>> {
        if let Some(key) = non_blank(env_value) {
            tracing::debug!("[Secret] Using Gemini API key from environment");
            return Ok(Some(key));
        }

        let secrets = self.load_secrets()?;
        Ok(non_blank(secrets.gemini.map(|g| g.api_key)))
    }

    /// Stores the Gemini key, restricting the file to its owner on unix.
    pub fn save_gemini_api_key(&self, api_key: &str) -> Result<()> {
        let key = api_key.trim().to_string();
        if key.is_empty() {
            return Err(MoodError::invalid_input("API key must not be empty"));
        }

        self.file.update(SecretConfig::default(), |secrets| {
            secrets.gemini = Some(GeminiConfig { api_key: key });
            Ok(())
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(self.file.path(), std::fs::Permissions::from_mode(0o600))?;
        }

        tracing::info!("[Secret] Saved Gemini API key to {}", self.file.path().display());
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
