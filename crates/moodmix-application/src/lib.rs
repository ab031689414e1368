//! Application layer for Moodmix.
//!
//! Wires the domain collaborators together: the translation cache, the
//! in-memory history list and the language/transition controller.

pub mod cocktail_cache;
pub mod history_list;
pub mod language_controller;

pub use cocktail_cache::CocktailCache;
pub use history_list::HistoryList;
pub use language_controller::{
    ControllerComponents, ControllerSnapshot, FlipResolution, LanguageController, MIN_INPUT_CHARS,
    SwitchResolution, ToggleOutcome, TransitionPhase,
};
