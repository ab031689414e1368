//! [`CocktailGenerator`] backed by a [`TextAgent`].

use crate::agent::{AgentError, AgentRequest, TextAgent, strip_code_fence};
use crate::prompts;
use async_trait::async_trait;
use moodmix_core::cocktail::{CocktailGenerator, Ingredient, RealRecipe, SonicVibe};
use moodmix_core::{Language, MoodCocktail};
use serde::Deserialize;
use std::sync::Arc;

/// The part of a cocktail the model is asked to produce. Identity and
/// timestamp are assigned locally.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CocktailDraft {
    name: String,
    description: String,
    base_color: String,
    secondary_color: String,
    mood_value: f64,
    intensity: f64,
    sensation: String,
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    real_recipe: Option<RealRecipe>,
    #[serde(default)]
    sonic_vibe: Option<SonicVibe>,
    #[serde(default)]
    coping_tip: Option<String>,
}

impl CocktailDraft {
    fn into_cocktail(self, language: Language) -> Result<MoodCocktail, AgentError> {
        if self.name.trim().is_empty() {
            return Err(AgentError::Parse("cocktail has no name".into()));
        }
        if self.ingredients.is_empty() {
            return Err(AgentError::Parse("cocktail has no ingredients".into()));
        }

        Ok(MoodCocktail {
            id: MoodCocktail::new_id(),
            language,
            name: self.name,
            description: self.description,
            base_color: self.base_color,
            secondary_color: self.secondary_color,
            mood_value: self.mood_value,
            intensity: self.intensity,
            sensation: self.sensation,
            ingredients: self.ingredients,
            real_recipe: self.real_recipe,
            sonic_vibe: self.sonic_vibe,
            coping_tip: self.coping_tip.filter(|tip| !tip.trim().is_empty()),
            created_at: MoodCocktail::now_millis(),
        }
        .normalized())
    }
}

/// Asks an agent for a cocktail and falls back to
/// [`MoodCocktail::fallback`] on any failure.
pub struct AgentCocktailGenerator {
    agent: Arc<dyn TextAgent>,
}

impl AgentCocktailGenerator {
    pub fn new(agent: Arc<dyn TextAgent>) -> Self {
        Self { agent }
    }

    async fn try_generate(&self, text: &str, language: Language) -> Result<MoodCocktail, AgentError> {
        let request = AgentRequest::new(prompts::render_generation_prompt(text, language)?)
            .with_system_instruction(prompts::MIXOLOGIST_INSTRUCTION)
            .with_response_schema(prompts::cocktail_schema());

        let raw = self.agent.execute(request).await?;
        let draft: CocktailDraft = serde_json::from_str(strip_code_fence(&raw))
            .map_err(|e| AgentError::Parse(format!("Invalid cocktail JSON: {}", e)))?;
        draft.into_cocktail(language)
    }
}

#[async_trait]
impl CocktailGenerator for AgentCocktailGenerator {
    async fn generate(&self, text: &str, language: Language) -> MoodCocktail {
        match self.try_generate(text, language).await {
            Ok(cocktail) => {
                tracing::info!(
                    "[Generator] Brewed '{}' ({}) via {}",
                    cocktail.name,
                    cocktail.id,
                    self.agent.expertise()
                );
                cocktail
            }
            Err(e) => {
                tracing::error!("[Generator] Generation failed, serving fallback: {}", e);
                MoodCocktail::fallback(language)
            }
        }
    }
}
