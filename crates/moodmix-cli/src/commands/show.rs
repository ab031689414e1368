use anyhow::{Context, Result};
use moodmix_application::{SwitchResolution, ToggleOutcome};
use moodmix_core::ui_text::UiText;

use super::context::AppContext;
use super::render;

pub async fn run(ctx: &AppContext, id: &str, translate: bool) -> Result<()> {
    let history = ctx.load_history().await?;
    let stored = history
        .into_iter()
        .find(|cocktail| cocktail.id == id)
        .with_context(|| {
            let labels = UiText::for_language(ctx.config.default_language);
            format!("{} ({})", labels.no_drink, id)
        })?;

    if !translate {
        render::print_cocktail(&stored);
        return Ok(());
    }

    let controller = ctx.controller(stored.language).await?;
    controller.select_history_entry(id).await?;

    let target = stored.language.other();
    eprintln!("{}", UiText::for_language(target).translating_status);
    match controller.toggle_language().await {
        ToggleOutcome::Switched {
            resolution: SwitchResolution::TranslationFailed,
            ..
        } => {
            tracing::warn!("[Show] Translation to {} failed, showing the stored version", target);
        }
        ToggleOutcome::Ignored => {
            tracing::warn!("[Show] Language switch was ignored");
        }
        ToggleOutcome::Switched { .. } => {}
    }

    let shown = controller.current().await.unwrap_or(stored);
    render::print_cocktail(&shown);
    Ok(())
}
