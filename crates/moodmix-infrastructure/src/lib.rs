//! File-system adapters for Moodmix: path layout, atomic document storage,
//! configuration and secret loading, and the JSON history store.

pub mod config_service;
pub mod json_history_repository;
pub mod paths;
pub mod secret_service;
pub mod storage;

pub use config_service::ConfigService;
pub use json_history_repository::JsonHistoryRepository;
pub use paths::{MoodmixPaths, ServiceType};
pub use secret_service::SecretService;
