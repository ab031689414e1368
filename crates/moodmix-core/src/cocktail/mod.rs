//! Cocktail domain module.
//!
//! # Module Structure
//!
//! - `model`: the `MoodCocktail` value, its ingredients and cache key
//! - `service`: generator and translator collaborator traits
//!
//! # Usage
//!
//! ```ignore
//! use moodmix_core::cocktail::{MoodCocktail, CocktailKey, CocktailGenerator};
//! ```

mod model;
mod service;

// Re-export public API
pub use model::{
    CocktailKey, Ingredient, IngredientPart, LOW_INTENSITY, MoodCocktail, RealRecipe, SonicVibe,
};
pub use service::{CocktailGenerator, CocktailTranslator};
