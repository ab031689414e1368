use moodmix_core::{CocktailKey, MoodCocktail};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory store of every language rendering seen so far.
///
/// Keyed by (cocktail id, language). Entries are only ever added or
/// replaced, never removed. Clones share the same map, so a cache handed to
/// the controller can still be inspected by its owner.
#[derive(Clone, Default)]
pub struct CocktailCache {
    entries: Arc<RwLock<HashMap<CocktailKey, MoodCocktail>>>,
}

impl CocktailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &CocktailKey) -> Option<MoodCocktail> {
        let entries = self.entries.read().await;
        entries.get(key).cloned()
    }

    /// Stores `cocktail` under `key`, replacing any earlier rendering.
    pub async fn put(&self, key: CocktailKey, cocktail: MoodCocktail) {
        let mut entries = self.entries.write().await;
        entries.insert(key, cocktail);
    }

    pub async fn contains(&self, key: &CocktailKey) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodmix_core::Language;

    #[tokio::test]
    async fn test_keys_are_per_language() {
        let cache = CocktailCache::new();
        let cocktail = MoodCocktail::fallback(Language::En);

        cache.put(cocktail.key(), cocktail.clone()).await;

        assert_eq!(cache.get(&cocktail.key()).await, Some(cocktail.clone()));
        assert!(
            cache
                .get(&CocktailKey::new(cocktail.id.clone(), Language::Zh))
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = CocktailCache::new();
        let shared = cache.clone();
        let cocktail = MoodCocktail::fallback(Language::Zh);

        shared.put(cocktail.key(), cocktail.clone()).await;

        assert!(cache.contains(&cocktail.key()).await);
        assert_eq!(cache.len().await, 1);
        assert!(!shared.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_replaces_without_dropping_other_renderings() {
        let cache = CocktailCache::new();
        let english = MoodCocktail::fallback(Language::En);
        let mut chinese = english.clone();
        chinese.language = Language::Zh;

        cache.put(english.key(), english.clone()).await;
        cache.put(chinese.key(), chinese.clone()).await;
        let mut renamed = english.clone();
        renamed.name = "Second Pour".to_string();
        cache.put(english.key(), renamed.clone()).await;

        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.get(&english.key()).await, Some(renamed));
        assert_eq!(cache.get(&chinese.key()).await, Some(chinese));
    }
}
