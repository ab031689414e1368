//! Prompt templates and response schemas for the cocktail and report adapters.

use crate::agent::AgentError;
use minijinja::{Environment, context};
use moodmix_core::Language;
use serde_json::{Value, json};

pub const MIXOLOGIST_INSTRUCTION: &str = "You are an expert \"Emotional Mixologist\". \
You turn what people tell you about their day into metaphorical cocktail recipes \
that embody their current emotional state.";

pub const TRANSLATOR_INSTRUCTION: &str = "You are a careful literary translator for a \
mood cocktail menu. You keep the tone poetic and never add or drop items.";

pub const REPORTER_INSTRUCTION: &str = "You are a gentle companion reading someone's \
mood cocktail journal. You notice patterns kindly and never diagnose.";

const GENERATION_TEMPLATE: &str = r#"Analyze the user's input text (which describes their day, feelings, or rant) and create a metaphorical cocktail recipe that embodies their current emotional state.

1. Analyze the sentiment (moodValue) and intensity.
2. Choose colors that match the emotion (Blue/Purple/Grey for sad/deep, Red/Orange for angry/intense, Yellow/Green for happy/calm).
3. Create a recipe where every ingredient symbolizes a part of their story.
4. Suggest a real drink that can be mixed at home, a music vibe for the moment, and one short, gentle coping tip.

Write every text field in {{ language }}. Keep colors as hex codes and ingredient parts as Base, Middle, Top or Finish.

User Input: "{{ text }}"
"#;

const TRANSLATION_TEMPLATE: &str = r#"Translate the text values of this cocktail from {{ source }} into {{ target }}.

Rules:
- Return the same JSON structure with the same keys.
- Keep the ingredients in the same order; there must be exactly {{ ingredient_count }} of them.
- Keep list lengths of the real recipe unchanged.
- Translate meaning and mood, not word by word.

Cocktail:
{{ payload }}
"#;

const REPORT_TEMPLATE: &str = r#"Here are the mood cocktails someone drank over the last {{ days }} days, newest first.

Mood counts: {{ negative }} negative, {{ neutral }} neutral, {{ positive }} positive ({{ total }} drinks, average mood {{ average_mood }} on a scale from -1 to 1).

Entries:
{{ entries }}

1. Summarize their emotional trend for this period in two or three warm sentences.
2. Name the dominant mood in one or two words.
3. Recommend one drink for the coming days, with a one-line description.

Write every text field in {{ language }}.
"#;

/// Figures from the period breakdown that go into the report prompt.
pub struct ReportFigures {
    pub days: u32,
    pub total: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive: usize,
    pub average_mood: f64,
}

pub fn render_generation_prompt(text: &str, language: Language) -> Result<String, AgentError> {
    render(
        GENERATION_TEMPLATE,
        context! {
            text => text.trim(),
            language => language.prompt_name(),
        },
    )
}

pub fn render_translation_prompt(
    payload: &Value,
    ingredient_count: usize,
    source: Language,
    target: Language,
) -> Result<String, AgentError> {
    let payload = serde_json::to_string_pretty(payload)
        .map_err(|e| AgentError::ExecutionFailed(format!("Failed to encode cocktail: {}", e)))?;
    render(
        TRANSLATION_TEMPLATE,
        context! {
            payload => payload,
            ingredient_count => ingredient_count,
            source => source.prompt_name(),
            target => target.prompt_name(),
        },
    )
}

pub fn render_report_prompt(
    figures: &ReportFigures,
    entries: &Value,
    language: Language,
) -> Result<String, AgentError> {
    let entries = serde_json::to_string_pretty(entries)
        .map_err(|e| AgentError::ExecutionFailed(format!("Failed to encode entries: {}", e)))?;
    render(
        REPORT_TEMPLATE,
        context! {
            days => figures.days,
            total => figures.total,
            negative => figures.negative,
            neutral => figures.neutral,
            positive => figures.positive,
            average_mood => format!("{:+.2}", figures.average_mood),
            entries => entries,
            language => language.prompt_name(),
        },
    )
}

fn render(template: &str, ctx: minijinja::Value) -> Result<String, AgentError> {
    Environment::new()
        .render_str(template, ctx)
        .map_err(|e| AgentError::ExecutionFailed(format!("Failed to render prompt: {}", e)))
}

fn ingredient_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "part": { "type": "STRING", "enum": ["Base", "Middle", "Top", "Finish"] },
            "name": { "type": "STRING", "description": "Ingredient name (e.g., Aged Rum, Lemon Zest, Smoke)" },
            "reason": { "type": "STRING", "description": "Why this ingredient fits the user's text (e.g., 'For your lingering regret')" }
        },
        "required": ["part", "name", "reason"]
    })
}

fn real_recipe_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
            "steps": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["name", "ingredients", "steps"]
    })
}

fn sonic_vibe_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "genre": { "type": "STRING" },
            "description": { "type": "STRING" }
        },
        "required": ["genre", "description"]
    })
}

/// Schema for a freshly generated cocktail.
pub fn cocktail_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "Creative, poetic name of the cocktail (e.g., Midnight Cacao Mild)" },
            "description": { "type": "STRING", "description": "A short, evocative description of the drink's vibe." },
            "baseColor": { "type": "STRING", "description": "Main hex color representing the mood (e.g., #4B0082)" },
            "secondaryColor": { "type": "STRING", "description": "Secondary hex color for gradients (e.g., #FF6347)" },
            "moodValue": { "type": "NUMBER", "description": "Estimated sentiment from -1.0 (very negative) to 1.0 (very positive)" },
            "intensity": { "type": "NUMBER", "description": "Emotional intensity from 0.0 (calm) to 1.0 (explosive)" },
            "sensation": { "type": "STRING", "description": "One word physical sensation (e.g., Tight, Floating, Heavy, Warm)" },
            "ingredients": { "type": "ARRAY", "items": ingredient_schema() },
            "realRecipe": real_recipe_schema(),
            "sonicVibe": sonic_vibe_schema(),
            "copingTip": { "type": "STRING", "description": "One short, gentle suggestion for the moment" }
        },
        "required": ["name", "description", "baseColor", "secondaryColor", "moodValue", "intensity", "sensation", "ingredients"]
    })
}

/// Schema for the text-only view sent to the translator.
pub fn translation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "description": { "type": "STRING" },
            "sensation": { "type": "STRING" },
            "ingredients": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "reason": { "type": "STRING" }
                    },
                    "required": ["name", "reason"]
                }
            },
            "realRecipe": real_recipe_schema(),
            "sonicVibe": sonic_vibe_schema(),
            "copingTip": { "type": "STRING" }
        },
        "required": ["name", "description", "sensation", "ingredients"]
    })
}

/// Schema for a period summary.
pub fn period_summary_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summaryText": { "type": "STRING", "description": "Two or three sentences on the emotional trend" },
            "dominantMood": { "type": "STRING", "description": "One or two words (e.g., Restless, Quietly hopeful)" },
            "suggestedDrinkName": { "type": "STRING" },
            "suggestedDrinkDescription": { "type": "STRING", "description": "One line on why this drink suits the period" }
        },
        "required": ["summaryText", "dominantMood", "suggestedDrinkName", "suggestedDrinkDescription"]
    })
}
