//! History repository trait.

use async_trait::async_trait;

use crate::cocktail::MoodCocktail;
use crate::error::Result;

/// An abstract store for the cocktail history.
///
/// The whole list is loaded once at startup and written back in full after
/// every mutation; there is no per-entry API.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Loads the persisted history, newest first.
    ///
    /// # Returns
    ///
    /// - `Ok(vec)`: stored history, or an empty list if nothing was stored yet
    /// - `Err(_)`: the store exists but could not be read or parsed
    async fn load(&self) -> Result<Vec<MoodCocktail>>;

    /// Replaces the persisted history with `history`.
    async fn save(&self, history: &[MoodCocktail]) -> Result<()>;
}
