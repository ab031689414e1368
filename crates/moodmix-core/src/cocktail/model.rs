//! Mood cocktail domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::Language;

/// Intensity given to fallback cocktails and idle readings.
pub const LOW_INTENSITY: f64 = 0.1;

/// Layer of the drink an ingredient belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientPart {
    Base,
    Middle,
    Top,
    Finish,
}

/// A single metaphorical ingredient and why it was chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub part: IngredientPart,
    pub name: String,
    /// e.g. "For your lingering regret"
    pub reason: String,
}

/// A drink that can actually be mixed at home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealRecipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// Descriptor for the ambient soundscape that accompanies a cocktail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonicVibe {
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
}

/// The generated mood cocktail.
///
/// Cocktails are immutable by convention: translation and normalisation
/// produce new values which replace earlier references, they never patch
/// a shared instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodCocktail {
    /// Stable identity shared by every language version of this cocktail
    pub id: String,
    pub language: Language,
    /// Creative, poetic name of the drink
    pub name: String,
    pub description: String,
    /// Hex colour, e.g. `#4B0082`
    pub base_color: String,
    pub secondary_color: String,
    /// Sentiment from -1.0 (very negative) to 1.0 (very positive)
    pub mood_value: f64,
    /// Emotional intensity from 0.0 (calm) to 1.0 (explosive)
    pub intensity: f64,
    /// One word physical sensation ("Tight", "Floating", ...)
    pub sensation: String,
    pub ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_recipe: Option<RealRecipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sonic_vibe: Option<SonicVibe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coping_tip: Option<String>,
    /// Unix timestamp in milliseconds
    pub created_at: i64,
}

/// Cache key: one cocktail identity rendered in one language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CocktailKey {
    pub id: String,
    pub language: Language,
}

impl CocktailKey {
    pub fn new(id: impl Into<String>, language: Language) -> Self {
        Self {
            id: id.into(),
            language,
        }
    }
}

impl MoodCocktail {
    /// Generates a fresh cocktail identity.
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Current time as used for `created_at`.
    pub fn now_millis() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    /// The cache key under which this snapshot belongs.
    pub fn key(&self) -> CocktailKey {
        CocktailKey::new(self.id.clone(), self.language)
    }

    /// Returns a copy whose numeric fields satisfy the model invariants.
    ///
    /// `mood_value` is clamped to [-1, 1] and `intensity` to [0, 1]; a NaN
    /// mood becomes neutral and a NaN intensity becomes [`LOW_INTENSITY`].
    pub fn normalized(mut self) -> Self {
        self.mood_value = if self.mood_value.is_nan() {
            0.0
        } else {
            self.mood_value.clamp(-1.0, 1.0)
        };
        self.intensity = if self.intensity.is_nan() {
            LOW_INTENSITY
        } else {
            self.intensity.clamp(0.0, 1.0)
        };
        self
    }

    /// A structurally valid placeholder used when generation fails.
    pub fn fallback(language: Language) -> Self {
        let (name, description, sensation, ingredient, reason) = match language {
            Language::En => (
                "Silent Fallback",
                "A quiet mix for when the connection fades.",
                "Static",
                "Neutral Spirit",
                "Connection lost",
            ),
            Language::Zh => (
                "无声备用",
                "当连接消散时的一杯安静调和。",
                "静止",
                "中性基酒",
                "连接中断",
            ),
        };

        Self {
            id: Self::new_id(),
            language,
            name: name.to_string(),
            description: description.to_string(),
            base_color: "#334155".to_string(),
            secondary_color: "#94a3b8".to_string(),
            mood_value: 0.0,
            intensity: LOW_INTENSITY,
            sensation: sensation.to_string(),
            ingredients: vec![Ingredient {
                part: IngredientPart::Base,
                name: ingredient.to_string(),
                reason: reason.to_string(),
            }],
            real_recipe: None,
            sonic_vibe: None,
            coping_tip: None,
            created_at: Self::now_millis(),
        }
    }
}
