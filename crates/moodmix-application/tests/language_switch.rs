//! Language switching: cache reuse, history consistency, re-entrancy and
//! late translations, all on tokio's paused clock.

mod support;

use moodmix_application::{SwitchResolution, ToggleOutcome, TransitionPhase};
use moodmix_core::{CocktailKey, Language};
use std::sync::Arc;
use std::time::Duration;
use support::*;

fn switched(language: Language, resolution: SwitchResolution) -> ToggleOutcome {
    ToggleOutcome::Switched {
        language,
        resolution,
    }
}

#[tokio::test(start_paused = true)]
async fn test_revisiting_a_language_uses_the_cache() {
    let translator = Arc::new(CountingTranslator::default());
    let controller = build_controller(
        Arc::new(NamingGenerator),
        translator.clone(),
        Arc::new(InMemoryHistory::default()),
    );
    controller.submit("long queue at the bank").await.unwrap();

    assert_eq!(
        controller.toggle_language().await,
        switched(Language::Zh, SwitchResolution::Translated)
    );
    assert_eq!(
        controller.toggle_language().await,
        switched(Language::En, SwitchResolution::CacheHit)
    );
    assert_eq!(
        controller.toggle_language().await,
        switched(Language::Zh, SwitchResolution::CacheHit)
    );

    assert_eq!(translator.calls(), 1);
    let current = controller.current().await.unwrap();
    assert_eq!(current.language, Language::Zh);
    assert_eq!(current.name, translated_name("long queue at the bank", Language::Zh));
}

#[tokio::test(start_paused = true)]
async fn test_translated_entry_keeps_id_timestamp_and_position() {
    let stored = vec![entry("newest", 3_000), entry("middle", 2_000), entry("oldest", 1_000)];
    let history = Arc::new(InMemoryHistory::with_entries(stored.clone()));
    let controller = build_controller(
        Arc::new(NamingGenerator),
        Arc::new(CountingTranslator::default()),
        history.clone(),
    );
    assert_eq!(controller.start().await, 3);

    controller.select_history_entry(&stored[1].id).await.unwrap();
    controller.toggle_language().await;

    let entries = controller.history().await;
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].id, stored[1].id);
    assert_eq!(entries[1].created_at, 2_000);
    assert_eq!(entries[1].language, Language::Zh);
    assert_eq!(entries[1].name, translated_name("middle", Language::Zh));
    assert_eq!(entries[1].ingredients[0].part, stored[1].ingredients[0].part);
    assert_eq!(entries[0], stored[0]);
    assert_eq!(entries[2], stored[2]);

    // persisted as well
    assert_eq!(history.stored(), entries);
}

#[tokio::test(start_paused = true)]
async fn test_toggle_during_transition_is_ignored() {
    let translator = Arc::new(CountingTranslator::default());
    let controller = build_controller(
        Arc::new(NamingGenerator),
        translator.clone(),
        Arc::new(InMemoryHistory::default()),
    );
    controller.submit("so much to do").await.unwrap();

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.toggle_language().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(controller.is_transitioning().await);
    assert_eq!(controller.phase().await, TransitionPhase::FadingOut);
    assert_eq!(controller.toggle_language().await, ToggleOutcome::Ignored);
    // still on the old language until the fade-out ends
    assert_eq!(controller.active_language().await, Language::En);

    assert_eq!(
        first.await.unwrap(),
        switched(Language::Zh, SwitchResolution::Translated)
    );
    assert_eq!(translator.calls(), 1);
    assert_eq!(controller.active_language().await, Language::Zh);
    assert!(!controller.is_transitioning().await);
}

#[tokio::test(start_paused = true)]
async fn test_language_flips_only_after_fade_out() {
    let controller = build_controller(
        Arc::new(NamingGenerator),
        Arc::new(CountingTranslator::default()),
        Arc::new(InMemoryHistory::default()),
    );

    let toggle = tokio::spawn({
        let controller = controller.clone();
        async move { controller.toggle_language().await }
    });

    tokio::time::sleep(Duration::from_millis(499)).await;
    assert_eq!(controller.active_language().await, Language::En);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(controller.active_language().await, Language::Zh);
    assert_eq!(controller.phase().await, TransitionPhase::FadingIn);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(controller.phase().await, TransitionPhase::Idle);
    toggle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_fade_in_finishes_while_translation_is_pending() {
    let translator = Arc::new(GatedTranslator::default());
    let controller = build_controller(
        Arc::new(NamingGenerator),
        translator.clone(),
        Arc::new(InMemoryHistory::default()),
    );
    let brewed = controller.submit("waiting for news").await.unwrap();

    let toggle = tokio::spawn({
        let controller = controller.clone();
        async move { controller.toggle_language().await }
    });
    tokio::time::sleep(Duration::from_millis(800)).await;

    let snapshot = controller.snapshot().await;
    assert!(!snapshot.transitioning);
    assert!(snapshot.translating);
    assert_eq!(snapshot.active_language, Language::Zh);
    assert_eq!(snapshot.current.unwrap().language, Language::En);

    translator.release();
    assert_eq!(
        toggle.await.unwrap(),
        switched(Language::Zh, SwitchResolution::Translated)
    );
    assert!(!controller.is_translating().await);
    assert_eq!(controller.current().await.unwrap().id, brewed.id);
    assert_eq!(controller.current().await.unwrap().language, Language::Zh);
}

#[tokio::test(start_paused = true)]
async fn test_late_translation_is_cached_but_not_displayed() {
    let translator = Arc::new(GatedTranslator::default());
    let controller = build_controller(
        Arc::new(NamingGenerator),
        translator.clone(),
        Arc::new(InMemoryHistory::default()),
    );
    let brewed = controller.submit("missed the train").await.unwrap();

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.toggle_language().await }
    });
    tokio::time::sleep(Duration::from_millis(800)).await;

    // back to English while the Chinese translation is still out
    assert_eq!(
        controller.toggle_language().await,
        switched(Language::En, SwitchResolution::CacheHit)
    );
    assert!(!controller.is_translating().await);

    translator.release();
    assert_eq!(
        first.await.unwrap(),
        switched(Language::Zh, SwitchResolution::Superseded)
    );

    let current = controller.current().await.unwrap();
    assert_eq!(current.language, Language::En);
    assert_eq!(current.name, "missed the train");
    assert_eq!(controller.history().await[0].language, Language::En);
    assert!(
        controller
            .cache()
            .contains(&CocktailKey::new(brewed.id.clone(), Language::Zh))
            .await
    );
    assert_eq!(translator.calls(), 1);

    // the late result is reused on the next visit
    assert_eq!(
        controller.toggle_language().await,
        switched(Language::Zh, SwitchResolution::CacheHit)
    );
    assert_eq!(translator.calls(), 1);
}
