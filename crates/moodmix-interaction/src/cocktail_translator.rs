//! [`CocktailTranslator`] backed by a [`TextAgent`].
//!
//! Only free text leaves the process. The translated text is applied onto a
//! copy of the original, so identity, timestamps, numbers, colors and
//! ingredient parts cannot drift.

use crate::agent::{AgentError, AgentRequest, TextAgent, strip_code_fence};
use crate::prompts;
use async_trait::async_trait;
use moodmix_core::cocktail::{CocktailTranslator, RealRecipe, SonicVibe};
use moodmix_core::{Language, MoodCocktail, MoodError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
struct IngredientText {
    name: String,
    reason: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatableText {
    name: String,
    description: String,
    sensation: String,
    ingredients: Vec<IngredientText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    real_recipe: Option<RealRecipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sonic_vibe: Option<SonicVibe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coping_tip: Option<String>,
}

impl TranslatableText {
    fn of(cocktail: &MoodCocktail) -> Self {
        Self {
            name: cocktail.name.clone(),
            description: cocktail.description.clone(),
            sensation: cocktail.sensation.clone(),
            ingredients: cocktail
                .ingredients
                .iter()
                .map(|i| IngredientText {
                    name: i.name.clone(),
                    reason: i.reason.clone(),
                })
                .collect(),
            real_recipe: cocktail.real_recipe.clone(),
            sonic_vibe: cocktail.sonic_vibe.clone(),
            coping_tip: cocktail.coping_tip.clone(),
        }
    }

    /// Optional sections the model left out keep their original text.
    fn apply_to(
        self,
        original: &MoodCocktail,
        target: Language,
    ) -> std::result::Result<MoodCocktail, AgentError> {
        if self.ingredients.len() != original.ingredients.len() {
            return Err(AgentError::Parse(format!(
                "expected {} ingredients, got {}",
                original.ingredients.len(),
                self.ingredients.len()
            )));
        }

        let mut translated = original.clone();
        translated.language = target;
        translated.name = self.name;
        translated.description = self.description;
        translated.sensation = self.sensation;
        for (ingredient, text) in translated.ingredients.iter_mut().zip(self.ingredients) {
            ingredient.name = text.name;
            ingredient.reason = text.reason;
        }
        if original.real_recipe.is_some() && self.real_recipe.is_some() {
            translated.real_recipe = self.real_recipe;
        }
        if original.sonic_vibe.is_some() && self.sonic_vibe.is_some() {
            translated.sonic_vibe = self.sonic_vibe;
        }
        if original.coping_tip.is_some() && self.coping_tip.is_some() {
            translated.coping_tip = self.coping_tip;
        }
        Ok(translated)
    }
}

pub struct AgentCocktailTranslator {
    agent: Arc<dyn TextAgent>,
}

impl AgentCocktailTranslator {
    pub fn new(agent: Arc<dyn TextAgent>) -> Self {
        Self { agent }
    }

    async fn try_translate(
        &self,
        cocktail: &MoodCocktail,
        target: Language,
    ) -> std::result::Result<MoodCocktail, AgentError> {
        let payload = serde_json::to_value(TranslatableText::of(cocktail))
            .map_err(|e| AgentError::ExecutionFailed(format!("Failed to encode cocktail: {}", e)))?;
        let prompt = prompts::render_translation_prompt(
            &payload,
            cocktail.ingredients.len(),
            cocktail.language,
            target,
        )?;
        let request = AgentRequest::new(prompt)
            .with_system_instruction(prompts::TRANSLATOR_INSTRUCTION)
            .with_response_schema(prompts::translation_schema());

        let raw = self.agent.execute(request).await?;
        let text: TranslatableText = serde_json::from_str(strip_code_fence(&raw))
            .map_err(|e| AgentError::Parse(format!("Invalid translation JSON: {}", e)))?;
        text.apply_to(cocktail, target)
    }
}

#[async_trait]
impl CocktailTranslator for AgentCocktailTranslator {
    async fn translate(&self, cocktail: &MoodCocktail, target: Language) -> Result<MoodCocktail> {
        if cocktail.language == target {
            return Ok(cocktail.clone());
        }

        self.try_translate(cocktail, target).await.map_err(|e| {
            MoodError::translation(format!(
                "cocktail {} to {}: {}",
                cocktail.id, target, e
            ))
        })
    }
}
