use anyhow::Result;
use chrono::Utc;
use moodmix_core::Language;
use moodmix_core::insights::{PeriodReport, PeriodReporter, emotional_wave, period_breakdown};
use moodmix_core::ui_text::UiText;

use super::context::AppContext;

const BAR_WIDTH: f64 = 10.0;

pub async fn run(ctx: &AppContext, days: u32, lang: Option<Language>, report: bool) -> Result<()> {
    let language = ctx.language_or_default(lang);
    let labels = UiText::for_language(language);
    let history = ctx.load_history().await?;
    let now = Utc::now();

    println!("{}", labels.wave_title);
    match emotional_wave(&history, now, days) {
        Some(wave) => {
            for day in wave {
                println!(
                    "  {}  {:+.2} {}  ({})",
                    day.date,
                    day.average_mood,
                    mood_bar(day.average_mood),
                    day.count
                );
            }
        }
        None => println!("  {}", labels.not_enough_data),
    }

    println!();
    println!("{}", labels.weekly_breakdown);
    match period_breakdown(&history, now, days) {
        Some(breakdown) => {
            println!("  {}: {}", labels.negative, breakdown.negative);
            println!("  {}: {}", labels.neutral, breakdown.neutral);
            println!("  {}: {}", labels.positive, breakdown.positive);
            println!(
                "  {}: {} ({:+.2})",
                labels.dominant_mood,
                labels.band_label(breakdown.dominant),
                breakdown.average_mood
            );
        }
        None => println!("  {}", labels.not_enough_data),
    }

    if !report {
        return Ok(());
    }

    println!();
    println!("{}", labels.report_title);
    let reporter = ctx.reporter()?;
    eprintln!("{}", labels.analyzing);
    match reporter.report(&history, now, days, language).await? {
        PeriodReport::Summary(summary) => {
            println!("  {}", summary.summary_text);
            println!("  {}: {}", labels.dominant_mood, summary.dominant_mood);
            println!();
            println!("{}", labels.recommended_title);
            println!("  {}", summary.suggested_drink_name);
            println!("  {}", summary.suggested_drink_description);
        }
        PeriodReport::NotEnoughData => println!("  {}", labels.report_no_data),
    }
    Ok(())
}

/// `-----|###  ` style bar centred on neutral.
fn mood_bar(mood: f64) -> String {
    let filled = (mood.abs() * BAR_WIDTH / 2.0).round() as usize;
    let half = (BAR_WIDTH / 2.0) as usize;
    let (left, right) = if mood < 0.0 {
        (
            format!("{}{}", " ".repeat(half - filled.min(half)), "#".repeat(filled.min(half))),
            " ".repeat(half),
        )
    } else {
        (
            " ".repeat(half),
            format!("{}{}", "#".repeat(filled.min(half)), " ".repeat(half - filled.min(half))),
        )
    };
    format!("{}|{}", left, right)
}
