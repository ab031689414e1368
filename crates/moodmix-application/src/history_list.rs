//! Ordered, id-unique cocktail history (newest first).

use moodmix_core::MoodCocktail;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryList {
    entries: Vec<MoodCocktail>,
}

impl HistoryList {
    /// Builds a list from stored entries, keeping the first occurrence of
    /// each id.
    pub fn from_entries(entries: Vec<MoodCocktail>) -> Self {
        let mut list = Self::default();
        for entry in entries {
            if list.find(&entry.id).is_none() {
                list.entries.push(entry);
            }
        }
        list
    }

    pub fn entries(&self) -> &[MoodCocktail] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&MoodCocktail> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Puts `cocktail` at the front, dropping an older entry with its id.
    pub fn insert_front(&mut self, cocktail: MoodCocktail) {
        self.entries.retain(|entry| entry.id != cocktail.id);
        self.entries.insert(0, cocktail);
    }

    /// Swaps in a new rendering of an existing entry at the same position.
    ///
    /// Returns `false` when no entry has that id.
    pub fn replace(&mut self, cocktail: MoodCocktail) -> bool {
        match self.position(&cocktail.id) {
            Some(index) => {
                self.entries[index] = cocktail;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodmix_core::Language;

    fn named(name: &str) -> MoodCocktail {
        let mut cocktail = MoodCocktail::fallback(Language::En);
        cocktail.name = name.to_string();
        cocktail
    }

    #[test]
    fn test_insert_front_dedupes_by_id() {
        let mut list = HistoryList::default();
        let first = named("first");
        let second = named("second");
        list.insert_front(first.clone());
        list.insert_front(second.clone());
        list.insert_front(first.clone());

        let names: Vec<&str> = list.entries().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut list = HistoryList::from_entries(vec![named("a"), named("b"), named("c")]);
        let mut translated = list.entries()[1].clone();
        translated.language = Language::Zh;
        translated.name = "乙".to_string();

        assert!(list.replace(translated.clone()));
        assert_eq!(list.position(&translated.id), Some(1));
        assert_eq!(list.entries()[1], translated);
        assert!(!list.replace(named("stranger")));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_from_entries_drops_duplicate_ids() {
        let a = named("a");
        let mut a_again = a.clone();
        a_again.name = "a2".to_string();

        let list = HistoryList::from_entries(vec![a.clone(), a_again]);

        assert_eq!(list.entries(), &[a]);
    }
}
