//! Shared wiring for commands: config, secrets, history store and the
//! controller built on top of them.

use anyhow::{Context, Result};
use moodmix_application::{CocktailCache, ControllerComponents, LanguageController};
use moodmix_core::config::AppConfig;
use moodmix_core::history::HistoryRepository;
use moodmix_core::timer::TokioTimer;
use moodmix_core::{Language, MoodCocktail};
use moodmix_infrastructure::{ConfigService, JsonHistoryRepository, SecretService};
use moodmix_interaction::{
    AgentCocktailGenerator, AgentCocktailTranslator, AgentPeriodReporter, GeminiApiAgent,
};
use std::path::PathBuf;
use std::sync::Arc;

pub struct AppContext {
    pub config: AppConfig,
    secrets: SecretService,
    history: Arc<JsonHistoryRepository>,
}

impl AppContext {
    pub fn new(config_dir: Option<PathBuf>) -> Result<Self> {
        let base = config_dir.as_deref();
        let config = ConfigService::new(base)?
            .get_config()
            .context("Failed to load config.toml")?;

        Ok(Self {
            config,
            secrets: SecretService::new(base)?,
            history: Arc::new(JsonHistoryRepository::new(base)?),
        })
    }

    pub fn secrets(&self) -> &SecretService {
        &self.secrets
    }

    pub fn language_or_default(&self, lang: Option<Language>) -> Language {
        lang.unwrap_or(self.config.default_language)
    }

    /// Stored history, newest first.
    pub async fn load_history(&self) -> Result<Vec<MoodCocktail>> {
        self.history
            .load()
            .await
            .context("Failed to read history.json")
    }

    /// Gemini agent for the configured model. Fails when no API key is configured.
    fn agent(&self) -> Result<Arc<GeminiApiAgent>> {
        let api_key = self.secrets.gemini_api_key()?.context(
            "No Gemini API key found. Set GEMINI_API_KEY or run `moodmix key <API_KEY>`",
        )?;
        Ok(Arc::new(GeminiApiAgent::from_config(api_key, &self.config.model)))
    }

    pub fn reporter(&self) -> Result<AgentPeriodReporter> {
        Ok(AgentPeriodReporter::new(self.agent()?))
    }

    /// Controller backed by Gemini.
    pub async fn controller(&self, language: Language) -> Result<LanguageController> {
        let agent = self.agent()?;

        let controller = LanguageController::new(
            ControllerComponents {
                generator: Arc::new(AgentCocktailGenerator::new(agent.clone())),
                translator: Arc::new(AgentCocktailTranslator::new(agent)),
                history_repository: self.history.clone(),
                cache: CocktailCache::new(),
                timer: Arc::new(TokioTimer),
            },
            self.config.transition,
            language,
        );
        controller.start().await;
        Ok(controller)
    }
}
