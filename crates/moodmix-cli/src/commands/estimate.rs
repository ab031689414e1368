use anyhow::Result;
use moodmix_core::estimator::ReadingStatus;
use moodmix_core::insights::MoodBand;
use moodmix_core::ui_text::UiText;
use moodmix_core::{Language, estimate};

use super::context::AppContext;

pub fn run(ctx: &AppContext, text: &str, lang: Option<Language>) -> Result<()> {
    let labels = UiText::for_language(ctx.language_or_default(lang));
    let reading = estimate(text);

    println!("{}", labels.status_line(ReadingStatus::of(text)));
    println!(
        "{} {:+.2} [{}]",
        labels.mood_label,
        reading.mood_value,
        labels.band_label(MoodBand::of(reading.mood_value))
    );
    println!("{} {:.2}", labels.intensity, reading.intensity);
    Ok(())
}
