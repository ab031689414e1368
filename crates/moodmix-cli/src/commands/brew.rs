use anyhow::Result;
use moodmix_core::Language;
use moodmix_core::ui_text::UiText;

use super::context::AppContext;
use super::render;

pub async fn run(ctx: &AppContext, text: &str, lang: Option<Language>) -> Result<()> {
    let language = ctx.language_or_default(lang);
    let controller = ctx.controller(language).await?;

    eprintln!("{}", UiText::for_language(language).distilling_status);
    let cocktail = controller.submit(text).await?;

    render::print_cocktail(&cocktail);
    Ok(())
}
