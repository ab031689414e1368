//! Plain-text rendering of cocktails for the terminal.

use chrono::{DateTime, Local};
use moodmix_core::cocktail::IngredientPart;
use moodmix_core::insights::MoodBand;
use moodmix_core::sonic::SoundscapePlan;
use moodmix_core::MoodCocktail;
use moodmix_core::ui_text::UiText;

pub fn created_at(cocktail: &MoodCocktail) -> String {
    DateTime::from_timestamp_millis(cocktail.created_at)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn part_label(part: IngredientPart) -> &'static str {
    match part {
        IngredientPart::Base => "Base",
        IngredientPart::Middle => "Middle",
        IngredientPart::Top => "Top",
        IngredientPart::Finish => "Finish",
    }
}

pub fn summary_line(cocktail: &MoodCocktail, text: &UiText) -> String {
    format!(
        "{}  {}  {}  {} {:+.2}  [{}]",
        cocktail.id,
        created_at(cocktail),
        cocktail.name,
        text.mood_label,
        cocktail.mood_value,
        text.band_label(MoodBand::of(cocktail.mood_value)),
    )
}

pub fn print_cocktail(cocktail: &MoodCocktail) {
    let text = UiText::for_language(cocktail.language);

    println!("{}", text.signature_blend);
    println!("  {}", cocktail.name);
    println!("  {}", cocktail.description);
    println!("  {} / {}", cocktail.base_color, cocktail.secondary_color);
    println!();
    println!(
        "{} {:+.2}   {} {:.2}   {}: {}",
        text.mood_label,
        cocktail.mood_value,
        text.intensity,
        cocktail.intensity,
        text.sensation,
        cocktail.sensation
    );
    println!();
    println!("{}", text.mood_composition);
    for ingredient in &cocktail.ingredients {
        println!(
            "  [{}] {} - {}",
            part_label(ingredient.part),
            ingredient.name,
            ingredient.reason
        );
    }

    if let Some(recipe) = &cocktail.real_recipe {
        println!();
        println!("{}: {}", text.real_recipe, recipe.name);
        for item in &recipe.ingredients {
            println!("  - {}", item);
        }
        for (index, step) in recipe.steps.iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
    }

    let plan = SoundscapePlan::for_mood(cocktail.mood_value, cocktail.sonic_vibe.as_ref());
    println!();
    println!(
        "{}: {} ({:?}, one note every {} ms)",
        text.mood_music, plan.label, plan.waveform, plan.note_interval_ms
    );
    if let Some(vibe) = cocktail
        .sonic_vibe
        .as_ref()
        .filter(|vibe| !vibe.description.is_empty())
    {
        println!("  {}", vibe.description);
    }

    if let Some(tip) = &cocktail.coping_tip {
        println!();
        println!("{}: {}", text.coping_tip, tip);
    }
}
