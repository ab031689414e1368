//! Brewing, history selection and failure handling.

mod support;

use moodmix_application::{SwitchResolution, ToggleOutcome};
use moodmix_core::{CocktailKey, Language, MoodCocktail};
use std::sync::Arc;
use support::*;

#[tokio::test]
async fn test_each_brew_is_recorded_exactly_once() {
    let history = Arc::new(InMemoryHistory::default());
    let controller = build_controller(
        Arc::new(FallbackGenerator),
        Arc::new(CountingTranslator::default()),
        history.clone(),
    );

    let first = controller.submit("the server is down").await.unwrap();
    let second = controller.submit("the server is down").await.unwrap();

    for cocktail in [&first, &second] {
        assert!(!cocktail.id.is_empty());
        assert!(cocktail.created_at > 0);
    }
    let entries = controller.history().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, second.id);
    assert_eq!(entries[1].id, first.id);
    assert_eq!(history.stored().len(), 2);
    assert_eq!(history.saves(), 2);
    assert!(controller.cache().contains(&first.key()).await);
}

#[tokio::test]
async fn test_brew_uses_active_language() {
    let controller = build_controller(
        Arc::new(NamingGenerator),
        Arc::new(CountingTranslator::default()),
        Arc::new(InMemoryHistory::default()),
    );

    let cocktail = controller.submit("  quiet evening  ").await.unwrap();

    assert_eq!(cocktail.language, Language::En);
    assert_eq!(cocktail.name, "quiet evening");
    assert_eq!(controller.current().await, Some(cocktail));
}

#[tokio::test]
async fn test_unreadable_history_starts_empty() {
    let controller = build_controller(
        Arc::new(NamingGenerator),
        Arc::new(CountingTranslator::default()),
        Arc::new(InMemoryHistory::unreadable()),
    );

    assert_eq!(controller.start().await, 0);
    assert!(controller.history().await.is_empty());

    controller.submit("fresh start").await.unwrap();
    assert_eq!(controller.history().await.len(), 1);
}

#[tokio::test]
async fn test_select_prefers_cached_rendering() {
    let controller = build_controller(
        Arc::new(NamingGenerator),
        Arc::new(CountingTranslator::default()),
        Arc::new(InMemoryHistory::default()),
    );
    let mut stored = entry("存档", 1_000);
    stored.language = Language::Zh;
    let mut english = stored.clone();
    english.language = Language::En;
    english.name = "Archive".to_string();
    controller.cache().put(english.key(), english.clone()).await;

    let shown = controller.select_from_history(&stored).await;

    assert_eq!(shown, english);
    assert_eq!(controller.current().await, Some(english));
}

#[tokio::test]
async fn test_select_miss_shows_stored_and_seeds_cache() {
    let controller = build_controller(
        Arc::new(NamingGenerator),
        Arc::new(CountingTranslator::default()),
        Arc::new(InMemoryHistory::default()),
    );
    let mut stored = entry("旧的", 1_000);
    stored.language = Language::Zh;

    let shown = controller.select_from_history(&stored).await;

    assert_eq!(shown, stored);
    assert!(controller.cache().contains(&stored.key()).await);
    assert!(
        !controller
            .cache()
            .contains(&CocktailKey::new(stored.id.clone(), Language::En))
            .await
    );
}

#[tokio::test]
async fn test_unknown_history_id_is_not_found() {
    let controller = build_controller(
        Arc::new(NamingGenerator),
        Arc::new(CountingTranslator::default()),
        Arc::new(InMemoryHistory::default()),
    );

    let err = controller.select_history_entry("missing").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test(start_paused = true)]
async fn test_failed_translation_keeps_content_but_not_language() {
    let translator = Arc::new(FailingTranslator::default());
    let history = Arc::new(InMemoryHistory::default());
    let controller = build_controller(Arc::new(NamingGenerator), translator.clone(), history.clone());
    let brewed = controller.submit("nothing works").await.unwrap();
    let saves_before = history.saves();

    assert_eq!(
        controller.toggle_language().await,
        ToggleOutcome::Switched {
            language: Language::Zh,
            resolution: SwitchResolution::TranslationFailed,
        }
    );

    assert_eq!(controller.active_language().await, Language::Zh);
    assert_eq!(controller.current().await, Some(brewed.clone()));
    assert_eq!(controller.history().await, vec![brewed.clone()]);
    assert!(!controller.is_translating().await);
    assert!(!controller.is_transitioning().await);
    assert_eq!(history.saves(), saves_before);
    assert!(
        !controller
            .cache()
            .contains(&CocktailKey::new(brewed.id.clone(), Language::Zh))
            .await
    );

    // no cache entry was written, so the next visit retries
    controller.toggle_language().await;
    controller.toggle_language().await;
    assert_eq!(translator.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_untranslated_echo_is_treated_as_failure() {
    let controller = build_controller(
        Arc::new(NamingGenerator),
        Arc::new(EchoTranslator),
        Arc::new(InMemoryHistory::default()),
    );
    let brewed: MoodCocktail = controller.submit("meh meh meh").await.unwrap();

    let outcome = controller.toggle_language().await;

    assert_eq!(
        outcome,
        ToggleOutcome::Switched {
            language: Language::Zh,
            resolution: SwitchResolution::TranslationFailed,
        }
    );
    assert_eq!(controller.cache().len().await, 1);
    assert_eq!(controller.current().await, Some(brewed));
}
