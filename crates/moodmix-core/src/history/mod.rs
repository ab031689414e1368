//! History domain module.
//!
//! The history itself is an ordered `Vec<MoodCocktail>` (newest first) owned
//! by the application layer; this module only defines how it is persisted.

mod repository;

pub use repository::HistoryRepository;
