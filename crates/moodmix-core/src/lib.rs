//! Domain layer for Moodmix.
//!
//! Holds the cocktail model, the local mood estimator and the collaborator
//! traits (generation, translation, history storage, transition timing)
//! that the application layer is written against.

pub mod cocktail;
pub mod config;
pub mod error;
pub mod estimator;
pub mod history;
pub mod insights;
pub mod language;
pub mod sonic;
pub mod timer;
pub mod ui_text;

// Re-export common types
pub use cocktail::{CocktailKey, MoodCocktail};
pub use error::{MoodError, Result};
pub use estimator::{MoodReading, estimate};
pub use language::Language;
