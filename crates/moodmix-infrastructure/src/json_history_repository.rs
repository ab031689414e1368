//! `history.json` backed [`HistoryRepository`].

use crate::paths::{MoodmixPaths, ServiceType};
use crate::storage::{AtomicFile, FileFormat};
use async_trait::async_trait;
use moodmix_core::cocktail::{Ingredient, RealRecipe, SonicVibe};
use moodmix_core::estimator::{ScriptFamily, classify_script};
use moodmix_core::history::HistoryRepository;
use moodmix_core::{Language, MoodCocktail, MoodError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const HISTORY_FORMAT_VERSION: u32 = 1;

/// Current on-disk layout.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryDocument {
    #[serde(default = "current_version")]
    version: u32,
    #[serde(default)]
    cocktails: Vec<MoodCocktail>,
}

fn current_version() -> u32 {
    HISTORY_FORMAT_VERSION
}

/// Entry of a bare array as browser builds kept it in local storage.
///
/// Those entries predate the `language` field and may lack the optional
/// sections; a missing language is inferred from the script of the text.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BareCocktail {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<Language>,
    name: String,
    #[serde(default)]
    description: String,
    base_color: String,
    secondary_color: String,
    mood_value: f64,
    intensity: f64,
    #[serde(default)]
    sensation: String,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    real_recipe: Option<RealRecipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sonic_vibe: Option<SonicVibe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coping_tip: Option<String>,
    created_at: i64,
}

impl From<BareCocktail> for MoodCocktail {
    fn from(entry: BareCocktail) -> Self {
        let language = entry.language.unwrap_or_else(|| {
            let text = format!("{} {}", entry.name, entry.description);
            match classify_script(&text) {
                ScriptFamily::Ideograph => Language::Zh,
                ScriptFamily::LatinToken => Language::En,
            }
        });

        MoodCocktail {
            id: entry.id,
            language,
            name: entry.name,
            description: entry.description,
            base_color: entry.base_color,
            secondary_color: entry.secondary_color,
            mood_value: entry.mood_value,
            intensity: entry.intensity,
            sensation: entry.sensation,
            ingredients: entry.ingredients,
            real_recipe: entry.real_recipe,
            sonic_vibe: entry.sonic_vibe,
            coping_tip: entry.coping_tip,
            created_at: entry.created_at,
        }
    }
}

/// Accepts both the versioned document and a bare array of cocktails.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredHistory {
    Document(HistoryDocument),
    Bare(Vec<BareCocktail>),
}

impl StoredHistory {
    fn into_cocktails(self) -> Vec<MoodCocktail> {
        match self {
            StoredHistory::Document(doc) => doc.cocktails,
            StoredHistory::Bare(entries) => entries.into_iter().map(MoodCocktail::from).collect(),
        }
    }
}

/// Stores the whole history as one JSON document, newest first.
pub struct JsonHistoryRepository {
    file: Arc<AtomicFile<StoredHistory>>,
}

impl JsonHistoryRepository {
    /// Repository at the default location (`history.json` in the config dir).
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = MoodmixPaths::new(base_path)
            .get_path(ServiceType::History)
            .map_err(|e| MoodError::config(format!("Failed to get history path: {}", e)))?;
        Ok(Self::at(path))
    }

    pub fn at(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicFile::new(path, FileFormat::Json)),
        }
    }
}

#[async_trait]
impl HistoryRepository for JsonHistoryRepository {
    async fn load(&self) -> Result<Vec<MoodCocktail>> {
        let file = Arc::clone(&self.file);
        let stored = tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| MoodError::internal(format!("History load task failed: {}", e)))??;

        let cocktails: Vec<MoodCocktail> = stored
            .map(StoredHistory::into_cocktails)
            .unwrap_or_default()
            .into_iter()
            .map(MoodCocktail::normalized)
            .collect();

        tracing::debug!("[History] Loaded {} cocktails", cocktails.len());
        Ok(cocktails)
    }

    async fn save(&self, history: &[MoodCocktail]) -> Result<()> {
        let file = Arc::clone(&self.file);
        let document = StoredHistory::Document(HistoryDocument {
            version: HISTORY_FORMAT_VERSION,
            cocktails: history.to_vec(),
        });
        let count = history.len();

        tokio::task::spawn_blocking(move || file.save(&document))
            .await
            .map_err(|e| MoodError::internal(format!("History save task failed: {}", e)))??;

        tracing::debug!("[History] Saved {} cocktails", count);
        Ok(())
    }
}
