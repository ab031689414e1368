//! Configuration models.
//!
//! `AppConfig` lives in `config.toml`, `SecretConfig` in `secret.json`.
//! Every field has a default so partial files load cleanly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::language::Language;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Language used for new cocktails when none is given on the command line.
    #[serde(default)]
    pub default_language: Language,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

/// Durations of the language switch animation.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    /// Fade-out before the language flips.
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u64,
    /// Fade-in after the flip, before the transition is reported finished.
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: u64,
}

impl TransitionConfig {
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            fade_out_ms: default_fade_out_ms(),
            fade_in_ms: default_fade_in_ms(),
        }
    }
}

fn default_fade_out_ms() -> u64 {
    500
}

fn default_fade_in_ms() -> u64 {
    200
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    #[serde(default = "default_model_name")]
    pub name: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            temperature: default_temperature(),
            base_url: default_base_url(),
        }
    }
}

fn default_model_name() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

/// API credentials. Never logged.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.transition.fade_out(), Duration::from_millis(500));
        assert_eq!(config.transition.fade_in(), Duration::from_millis(200));
        assert_eq!(config.model.name, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn test_partial_toml_overrides_only_given_fields() {
        let config: AppConfig = toml::from_str(
            r#"
default_language = "zh"

[transition]
fade_in_ms = 50
"#,
        )
        .unwrap();
        assert_eq!(config.default_language, Language::Zh);
        assert_eq!(config.transition.fade_out_ms, 500);
        assert_eq!(config.transition.fade_in_ms, 50);
    }

    #[test]
    fn test_secret_config_without_gemini() {
        let secrets: SecretConfig = serde_json::from_str("{}").unwrap();
        assert!(secrets.gemini.is_none());
    }
}
