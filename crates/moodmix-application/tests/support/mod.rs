//! Hand-written collaborators for controller tests.

#![allow(dead_code)]

use async_trait::async_trait;
use moodmix_application::{CocktailCache, ControllerComponents, LanguageController};
use moodmix_core::cocktail::{CocktailGenerator, CocktailTranslator};
use moodmix_core::config::TransitionConfig;
use moodmix_core::history::HistoryRepository;
use moodmix_core::timer::TokioTimer;
use moodmix_core::{Language, MoodCocktail, MoodError, Result};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Names the cocktail after the input.
pub struct NamingGenerator;

#[async_trait]
impl CocktailGenerator for NamingGenerator {
    async fn generate(&self, text: &str, language: Language) -> MoodCocktail {
        let mut cocktail = MoodCocktail::fallback(language);
        cocktail.name = text.to_string();
        cocktail.mood_value = 0.4;
        cocktail
    }
}

/// Always serves the fallback, as a generator does after an upstream error.
pub struct FallbackGenerator;

#[async_trait]
impl CocktailGenerator for FallbackGenerator {
    async fn generate(&self, _text: &str, language: Language) -> MoodCocktail {
        MoodCocktail::fallback(language)
    }
}

pub fn translated_name(name: &str, target: Language) -> String {
    format!("{} ({})", name, target)
}

#[derive(Default)]
pub struct CountingTranslator {
    calls: AtomicUsize,
}

impl CountingTranslator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CocktailTranslator for CountingTranslator {
    async fn translate(&self, cocktail: &MoodCocktail, target: Language) -> Result<MoodCocktail> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut translated = cocktail.clone();
        translated.language = target;
        translated.name = translated_name(&cocktail.name, target);
        for ingredient in &mut translated.ingredients {
            ingredient.reason = translated_name(&ingredient.reason, target);
        }
        Ok(translated)
    }
}

/// Waits for `release()` before translating.
#[derive(Default)]
pub struct GatedTranslator {
    gate: Notify,
    inner: CountingTranslator,
}

impl GatedTranslator {
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.inner.calls()
    }
}

#[async_trait]
impl CocktailTranslator for GatedTranslator {
    async fn translate(&self, cocktail: &MoodCocktail, target: Language) -> Result<MoodCocktail> {
        self.gate.notified().await;
        self.inner.translate(cocktail, target).await
    }
}

#[derive(Default)]
pub struct FailingTranslator {
    calls: AtomicUsize,
}

impl FailingTranslator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CocktailTranslator for FailingTranslator {
    async fn translate(&self, _cocktail: &MoodCocktail, _target: Language) -> Result<MoodCocktail> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(MoodError::translation("model unavailable"))
    }
}

/// Hands the input back untouched, the way some translators signal failure.
pub struct EchoTranslator;

#[async_trait]
impl CocktailTranslator for EchoTranslator {
    async fn translate(&self, cocktail: &MoodCocktail, _target: Language) -> Result<MoodCocktail> {
        Ok(cocktail.clone())
    }
}

#[derive(Default)]
pub struct InMemoryHistory {
    stored: Mutex<Vec<MoodCocktail>>,
    saves: AtomicUsize,
    fail_load: bool,
}

impl InMemoryHistory {
    pub fn with_entries(entries: Vec<MoodCocktail>) -> Self {
        Self {
            stored: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn unreadable() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<MoodCocktail> {
        self.stored.lock().unwrap().clone()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistory {
    async fn load(&self) -> Result<Vec<MoodCocktail>> {
        if self.fail_load {
            return Err(MoodError::Serialization {
                format: "JSON".to_string(),
                message: "unexpected end of input".to_string(),
            });
        }
        Ok(self.stored())
    }

    async fn save(&self, history: &[MoodCocktail]) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.stored.lock().unwrap() = history.to_vec();
        Ok(())
    }
}

pub fn build_controller(
    generator: Arc<dyn CocktailGenerator>,
    translator: Arc<dyn CocktailTranslator>,
    history: Arc<InMemoryHistory>,
) -> Arc<LanguageController> {
    Arc::new(LanguageController::new(
        ControllerComponents {
            generator,
            translator,
            history_repository: history,
            cache: CocktailCache::new(),
            timer: Arc::new(TokioTimer),
        },
        TransitionConfig::default(),
        Language::En,
    ))
}

pub fn entry(name: &str, created_at: i64) -> MoodCocktail {
    let mut cocktail = MoodCocktail::fallback(Language::En);
    cocktail.name = name.to_string();
    cocktail.created_at = created_at;
    cocktail
}
