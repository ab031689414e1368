//! Generation and translation collaborator traits.
//!
//! Both are implemented by adapters that talk to a remote content model;
//! the application layer only ever sees these traits.

use async_trait::async_trait;

use super::model::MoodCocktail;
use crate::error::Result;
use crate::language::Language;

/// Produces a new cocktail from the user's free text.
#[async_trait]
pub trait CocktailGenerator: Send + Sync {
    /// Generates a cocktail tagged with `language`.
    ///
    /// This call cannot fail. Implementations absorb every internal error and
    /// return [`MoodCocktail::fallback`] (neutral mood, low intensity, fresh id
    /// and timestamp) instead.
    async fn generate(&self, text: &str, language: Language) -> MoodCocktail;
}

/// Renders an existing cocktail in another language.
#[async_trait]
pub trait CocktailTranslator: Send + Sync {
    /// Translates the free-text fields of `cocktail` into `target`.
    ///
    /// # Returns
    ///
    /// - `Ok(MoodCocktail)`: same `id`, `created_at`, numeric fields and
    ///   ingredient parts; `language == target`
    /// - `Err(_)`: translation failed; the caller keeps the original
    async fn translate(&self, cocktail: &MoodCocktail, target: Language) -> Result<MoodCocktail>;
}
