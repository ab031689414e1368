//! Language/cache synchronization controller.
//!
//! Owns the active language, the displayed cocktail, the history list and
//! the translation cache, and runs the timed language switch:
//!
//! ```text
//! Idle -> FadingOut -(D1)-> LanguageFlipped{..} -> FadingIn -(D2)-> Idle
//! ```
//!
//! Only one switch runs at a time; a toggle while the phase is not `Idle`
//! is ignored. A cache miss starts the translator call, and the fade-in
//! timer runs alongside it, so the transition can finish before the
//! translation arrives. Each toggle gets an epoch number; a translation that
//! lands after a newer toggle started only updates the cache.

use crate::cocktail_cache::CocktailCache;
use crate::history_list::HistoryList;
use moodmix_core::cocktail::{CocktailGenerator, CocktailTranslator};
use moodmix_core::config::TransitionConfig;
use moodmix_core::history::HistoryRepository;
use moodmix_core::timer::TransitionTimer;
use moodmix_core::{CocktailKey, Language, MoodCocktail, MoodError, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shortest input (in characters, after trimming) worth brewing.
pub const MIN_INPUT_CHARS: usize = 3;

/// How the flip step found the content for the new language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipResolution {
    /// No cocktail was displayed.
    NothingDisplayed,
    CacheHit,
    /// Cache miss, translator called.
    Fetching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    FadingOut,
    LanguageFlipped(FlipResolution),
    FadingIn,
}

/// Final result of a language switch, as seen by the toggling caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchResolution {
    NothingDisplayed,
    CacheHit,
    Translated,
    /// Translator failed; the previous rendering stays on screen.
    TranslationFailed,
    /// The translation arrived after a newer toggle; only the cache kept it.
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Another switch was still running.
    Ignored,
    Switched {
        language: Language,
        resolution: SwitchResolution,
    },
}

/// Point-in-time copy of the observable controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSnapshot {
    pub active_language: Language,
    pub phase: TransitionPhase,
    pub transitioning: bool,
    pub translating: bool,
    pub current: Option<MoodCocktail>,
    pub history: Vec<MoodCocktail>,
}

/// Collaborators injected into the controller.
pub struct ControllerComponents {
    pub generator: Arc<dyn CocktailGenerator>,
    pub translator: Arc<dyn CocktailTranslator>,
    pub history_repository: Arc<dyn HistoryRepository>,
    pub cache: CocktailCache,
    pub timer: Arc<dyn TransitionTimer>,
}

struct ControllerState {
    active_language: Language,
    phase: TransitionPhase,
    epoch: u64,
    /// Epoch of the toggle whose translation is still awaited.
    translating_epoch: Option<u64>,
    current: Option<MoodCocktail>,
    history: HistoryList,
}

/// What the flip step left for the resolve step.
enum Flipped {
    NothingDisplayed,
    CacheHit,
    Fetch(MoodCocktail),
}

pub struct LanguageController {
    generator: Arc<dyn CocktailGenerator>,
    translator: Arc<dyn CocktailTranslator>,
    history_repository: Arc<dyn HistoryRepository>,
    cache: CocktailCache,
    timer: Arc<dyn TransitionTimer>,
    transition: TransitionConfig,
    state: Mutex<ControllerState>,
    /// Serializes history writes so the last save holds the latest list.
    persist_lock: Mutex<()>,
}

impl LanguageController {
    pub fn new(
        components: ControllerComponents,
        transition: TransitionConfig,
        initial_language: Language,
    ) -> Self {
        Self {
            generator: components.generator,
            translator: components.translator,
            history_repository: components.history_repository,
            cache: components.cache,
            timer: components.timer,
            transition,
            state: Mutex::new(ControllerState {
                active_language: initial_language,
                phase: TransitionPhase::Idle,
                epoch: 0,
                translating_epoch: None,
                current: None,
                history: HistoryList::default(),
            }),
            persist_lock: Mutex::new(()),
        }
    }

    /// Loads the stored history. A failing store leaves the history empty.
    ///
    /// Returns the number of entries loaded.
    pub async fn start(&self) -> usize {
        let entries = match self.history_repository.load().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("[History] Failed to load history, starting empty: {}", e);
                Vec::new()
            }
        };

        let mut state = self.state.lock().await;
        state.history = HistoryList::from_entries(entries);
        tracing::info!("[Controller] Started with {} history entries", state.history.len());
        state.history.len()
    }

    // ============================================================================
    // Brewing and selection
    // ============================================================================

    /// Brews a cocktail for `text` in the active language and displays it.
    ///
    /// The generator never fails; the only error is input shorter than
    /// [`MIN_INPUT_CHARS`].
    pub async fn submit(&self, text: &str) -> Result<MoodCocktail> {
        let trimmed = text.trim();
        if trimmed.chars().count() < MIN_INPUT_CHARS {
            return Err(MoodError::invalid_input(format!(
                "input must be at least {} characters",
                MIN_INPUT_CHARS
            )));
        }

        let language = self.active_language().await;
        let cocktail = self.generator.generate(trimmed, language).await.normalized();

        {
            let mut state = self.state.lock().await;
            state.current = Some(cocktail.clone());
            state.history.insert_front(cocktail.clone());
        }
        self.cache.put(cocktail.key(), cocktail.clone()).await;
        self.persist_history().await;

        tracing::info!(
            "[Controller] Brewed '{}' ({}) in {}",
            cocktail.name,
            cocktail.id,
            cocktail.language
        );
        Ok(cocktail)
    }

    /// Displays `cocktail`, preferring its cached rendering in the active
    /// language. Returns what is now displayed.
    pub async fn select_from_history(&self, cocktail: &MoodCocktail) -> MoodCocktail {
        let mut state = self.state.lock().await;
        let key = CocktailKey::new(cocktail.id.clone(), state.active_language);

        let shown = match self.cache.get(&key).await {
            Some(cached) => cached,
            None => {
                tracing::debug!(
                    "[Controller] No {} rendering of {} cached, showing stored {}",
                    key.language,
                    cocktail.id,
                    cocktail.language
                );
                self.cache.put(cocktail.key(), cocktail.clone()).await;
                cocktail.clone()
            }
        };

        state.current = Some(shown.clone());
        shown
    }

    /// Like [`select_from_history`](Self::select_from_history), by id.
    pub async fn select_history_entry(&self, id: &str) -> Result<MoodCocktail> {
        let entry = {
            let state = self.state.lock().await;
            state
                .history
                .find(id)
                .cloned()
                .ok_or_else(|| MoodError::not_found("Cocktail", id))?
        };
        Ok(self.select_from_history(&entry).await)
    }

    // ============================================================================
    // Language switch
    // ============================================================================

    /// Runs one language switch to completion.
    pub async fn toggle_language(&self) -> ToggleOutcome {
        let epoch = {
            let mut state = self.state.lock().await;
            if state.phase != TransitionPhase::Idle {
                tracing::debug!("[Controller] Toggle ignored, transition in progress");
                return ToggleOutcome::Ignored;
            }
            state.phase = TransitionPhase::FadingOut;
            state.epoch += 1;
            state.epoch
        };
        tracing::debug!("[Controller] Fading out (epoch {})", epoch);

        self.timer.sleep(self.transition.fade_out()).await;

        let (language, flipped) = self.flip_language(epoch).await;
        let (resolution, ()) = tokio::join!(
            self.resolve_flip(epoch, language, flipped),
            self.fade_in()
        );

        tracing::info!("[Controller] Switched to {} ({:?})", language, resolution);
        ToggleOutcome::Switched {
            language,
            resolution,
        }
    }

    async fn flip_language(&self, epoch: u64) -> (Language, Flipped) {
        let mut state = self.state.lock().await;
        let language = state.active_language.other();
        state.active_language = language;

        let flipped = match state.current.clone() {
            None => Flipped::NothingDisplayed,
            Some(current) => {
                let key = CocktailKey::new(current.id.clone(), language);
                match self.cache.get(&key).await {
                    Some(cached) => {
                        state.current = Some(cached);
                        Flipped::CacheHit
                    }
                    None => Flipped::Fetch(current),
                }
            }
        };

        let resolution = match &flipped {
            Flipped::NothingDisplayed => FlipResolution::NothingDisplayed,
            Flipped::CacheHit => FlipResolution::CacheHit,
            Flipped::Fetch(_) => FlipResolution::Fetching,
        };
        // a newer toggle owns the translating flag from here on
        state.translating_epoch = match resolution {
            FlipResolution::Fetching => Some(epoch),
            _ => None,
        };
        state.phase = TransitionPhase::LanguageFlipped(resolution);
        (language, flipped)
    }

    async fn fade_in(&self) {
        self.state.lock().await.phase = TransitionPhase::FadingIn;
        self.timer.sleep(self.transition.fade_in()).await;
        self.state.lock().await.phase = TransitionPhase::Idle;
    }

    async fn resolve_flip(&self, epoch: u64, language: Language, flipped: Flipped) -> SwitchResolution {
        let original = match flipped {
            Flipped::NothingDisplayed => return SwitchResolution::NothingDisplayed,
            Flipped::CacheHit => return SwitchResolution::CacheHit,
            Flipped::Fetch(original) => original,
        };

        let translated = self
            .translator
            .translate(&original, language)
            .await
            .and_then(|translated| check_translation(&original, translated, language));

        match translated {
            Ok(translated) => self.apply_translation(epoch, translated).await,
            Err(e) => {
                tracing::warn!(
                    "[Controller] Translation of {} to {} failed: {}",
                    original.id,
                    language,
                    e
                );
                let mut state = self.state.lock().await;
                if state.translating_epoch == Some(epoch) {
                    state.translating_epoch = None;
                }
                SwitchResolution::TranslationFailed
            }
        }
    }

    async fn apply_translation(&self, epoch: u64, translated: MoodCocktail) -> SwitchResolution {
        self.cache.put(translated.key(), translated.clone()).await;

        let history_changed = {
            let mut state = self.state.lock().await;
            if state.translating_epoch == Some(epoch) {
                state.translating_epoch = None;
            }
            if state.epoch != epoch {
                tracing::debug!(
                    "[Controller] Translation for epoch {} arrived during epoch {}, cached only",
                    epoch,
                    state.epoch
                );
                return SwitchResolution::Superseded;
            }

            if state.current.as_ref().is_some_and(|c| c.id == translated.id) {
                state.current = Some(translated.clone());
            }
            state.history.replace(translated)
        };

        if history_changed {
            self.persist_history().await;
        }
        SwitchResolution::Translated
    }

    async fn persist_history(&self) {
        let _guard = self.persist_lock.lock().await;
        let snapshot = self.state.lock().await.history.entries().to_vec();
        if let Err(e) = self.history_repository.save(&snapshot).await {
            tracing::warn!("[History] Failed to save {} entries: {}", snapshot.len(), e);
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub async fn active_language(&self) -> Language {
        self.state.lock().await.active_language
    }

    pub async fn phase(&self) -> TransitionPhase {
        self.state.lock().await.phase
    }

    pub async fn is_transitioning(&self) -> bool {
        self.state.lock().await.phase != TransitionPhase::Idle
    }

    pub async fn is_translating(&self) -> bool {
        self.state.lock().await.translating_epoch.is_some()
    }

    pub async fn current(&self) -> Option<MoodCocktail> {
        self.state.lock().await.current.clone()
    }

    pub async fn history(&self) -> Vec<MoodCocktail> {
        self.state.lock().await.history.entries().to_vec()
    }

    pub fn cache(&self) -> &CocktailCache {
        &self.cache
    }

    pub async fn snapshot(&self) -> ControllerSnapshot {
        let state = self.state.lock().await;
        ControllerSnapshot {
            active_language: state.active_language,
            phase: state.phase,
            transitioning: state.phase != TransitionPhase::Idle,
            translating: state.translating_epoch.is_some(),
            current: state.current.clone(),
            history: state.history.entries().to_vec(),
        }
    }
}

/// Rejects translator output that would corrupt the cache or history.
fn check_translation(
    original: &MoodCocktail,
    translated: MoodCocktail,
    target: Language,
) -> Result<MoodCocktail> {
    if translated.id != original.id || translated.created_at != original.created_at {
        return Err(MoodError::translation(format!(
            "translator changed the identity of {}",
            original.id
        )));
    }
    if translated.language != target {
        return Err(MoodError::translation(format!(
            "translator returned {} instead of {}",
            translated.language, target
        )));
    }
    Ok(translated.normalized())
}
