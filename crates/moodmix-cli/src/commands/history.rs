use anyhow::Result;
use moodmix_core::Language;
use moodmix_core::ui_text::UiText;

use super::context::AppContext;
use super::render;

pub async fn run(ctx: &AppContext, limit: Option<usize>, lang: Option<Language>) -> Result<()> {
    let labels = UiText::for_language(ctx.language_or_default(lang));
    let history = ctx.load_history().await?;

    println!("{}", labels.journey_title);
    if history.is_empty() {
        println!("  {}", labels.empty_shelf);
        println!("  {}", labels.empty_shelf_sub);
        return Ok(());
    }

    for cocktail in history.iter().take(limit.unwrap_or(usize::MAX)) {
        println!("  {}", render::summary_line(cocktail, labels));
    }
    Ok(())
}
