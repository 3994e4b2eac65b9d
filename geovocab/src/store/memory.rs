//! In-memory lookup store.
//!
//! The dictionary is immutable after bootstrap and needs no locking. Premium
//! mappings live in `DashMap`s so concurrent requests can read while a
//! registration is in progress.
//!
//! # Consistency
//!
//! - `insert_premium()` holds the geohash entry while checking, journaling
//!   and inserting, so two registrations for one geohash cannot both succeed
//! - The phrase index is written before the geohash entry is released; the
//!   first registration of a phrase owns it
//! - No code path holds a lock on both maps in the opposite order
//! - The journal `sync_data` runs under the geohash shard's write lock, so
//!   lookups of other geohashes in that shard wait for the flush

use std::collections::HashMap;
use std::path::Path;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::dictionary::Dictionary;
use super::journal::PremiumJournal;
use super::types::{PremiumMapping, StoreError, WordMapping};
use super::LookupStore;

/// Lookup store backed by the loaded dictionary and in-memory premium maps.
pub struct MemoryStore {
    dictionary: Dictionary,
    /// geohash → phrase
    premium: DashMap<String, String>,
    /// phrase → geohash
    premium_phrases: DashMap<String, String>,
    journal: Option<PremiumJournal>,
}

impl MemoryStore {
    /// Create a store whose premium mappings live only in memory.
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            premium: DashMap::new(),
            premium_phrases: DashMap::new(),
            journal: None,
        }
    }

    /// Create a store that persists premium mappings to a journal file.
    ///
    /// Existing journal entries are replayed; if a geohash appears twice the
    /// first entry wins.
    pub fn with_journal(
        dictionary: Dictionary,
        path: impl AsRef<Path>,
    ) -> Result<Self, StoreError> {
        let (journal, existing) = PremiumJournal::open(path)?;
        let replayed = existing.len();

        let mut store = Self::new(dictionary);
        for mapping in existing {
            store.index_premium(mapping);
        }
        store.journal = Some(journal);

        tracing::info!(
            replayed,
            premium = store.premium.len(),
            "Premium journal replayed"
        );
        Ok(store)
    }

    /// The loaded dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn index_premium(&mut self, mapping: PremiumMapping) {
        if let Entry::Vacant(slot) = self.premium.entry(mapping.geohash.clone()) {
            self.premium_phrases
                .entry(mapping.phrase.clone())
                .or_insert_with(|| mapping.geohash.clone());
            slot.insert(mapping.phrase);
        }
    }
}

impl LookupStore for MemoryStore {
    fn word_by_segment(&self, segment: &str) -> Result<Option<String>, StoreError> {
        Ok(self.dictionary.word(segment).map(str::to_string))
    }

    fn words_by_segments(&self, segments: &[&str]) -> Result<HashMap<String, String>, StoreError> {
        Ok(segments
            .iter()
            .filter_map(|segment| {
                self.dictionary
                    .word(segment)
                    .map(|word| (segment.to_string(), word.to_string()))
            })
            .collect())
    }

    fn segments_by_words(&self, words: &[&str]) -> Result<HashMap<String, String>, StoreError> {
        Ok(words
            .iter()
            .filter_map(|word| {
                self.dictionary
                    .segment(word)
                    .map(|segment| (word.to_string(), segment.to_string()))
            })
            .collect())
    }

    fn premium_by_geohash(&self, geohash: &str) -> Result<Option<PremiumMapping>, StoreError> {
        Ok(self
            .premium
            .get(geohash)
            .map(|phrase| PremiumMapping::new(geohash, phrase.value().clone())))
    }

    fn premium_by_phrase(&self, phrase: &str) -> Result<Option<PremiumMapping>, StoreError> {
        Ok(self
            .premium_phrases
            .get(phrase)
            .map(|geohash| PremiumMapping::new(geohash.value().clone(), phrase)))
    }

    fn insert_premium(&self, mapping: PremiumMapping) -> Result<(), StoreError> {
        match self.premium.entry(mapping.geohash.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(mapping.geohash)),
            Entry::Vacant(slot) => {
                if let Some(journal) = &self.journal {
                    journal.append(&mapping)?;
                }
                self.premium_phrases
                    .entry(mapping.phrase.clone())
                    .or_insert_with(|| mapping.geohash.clone());
                slot.insert(mapping.phrase);
                Ok(())
            }
        }
    }

    fn word_mappings(&self, offset: usize, limit: usize) -> Result<Vec<WordMapping>, StoreError> {
        Ok(self
            .dictionary
            .iter()
            .skip(offset)
            .take(limit)
            .map(|(segment, word)| WordMapping::new(segment, word))
            .collect())
    }

    fn count_word_mappings(&self) -> Result<usize, StoreError> {
        Ok(self.dictionary.len())
    }

    fn count_premium_mappings(&self) -> Result<usize, StoreError> {
        Ok(self.premium.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn test_store() -> MemoryStore {
        MemoryStore::new(Dictionary::from_pairs([
            ("9q8", "apple"),
            ("yyk", "river"),
            ("8yt", "canyon"),
        ]))
    }

    #[test]
    fn test_memory_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemoryStore>();
    }

    #[test]
    fn test_word_by_segment() {
        let store = test_store();
        assert_eq!(store.word_by_segment("yyk").unwrap().as_deref(), Some("river"));
        assert_eq!(store.word_by_segment("zzz").unwrap(), None);
    }

    #[test]
    fn test_set_lookups_return_partial_results() {
        let store = test_store();

        let words = store.words_by_segments(&["9q8", "zzz", "8yt"]).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words["9q8"], "apple");
        assert_eq!(words["8yt"], "canyon");

        let segments = store.segments_by_words(&["river", "banana"]).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments["river"], "yyk");
    }

    #[test]
    fn test_set_lookup_collapses_repeats() {
        let store = test_store();
        let words = store.words_by_segments(&["9q8", "9q8", "9q8"]).unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_insert_premium_rejects_duplicate_geohash() {
        let store = test_store();
        store
            .insert_premium(PremiumMapping::new("9q8yyk8yt", "golden-gate-view"))
            .unwrap();

        let result = store.insert_premium(PremiumMapping::new("9q8yyk8yt", "other-phrase-here"));
        assert!(matches!(result, Err(StoreError::DuplicateKey(ref g)) if g == "9q8yyk8yt"));

        // The first registration is untouched
        let premium = store.premium_by_geohash("9q8yyk8yt").unwrap().unwrap();
        assert_eq!(premium.phrase, "golden-gate-view");
        assert!(store.premium_by_phrase("other-phrase-here").unwrap().is_none());
        assert_eq!(store.count_premium_mappings().unwrap(), 1);
    }

    #[test]
    fn test_premium_phrase_index() {
        let store = test_store();
        store
            .insert_premium(PremiumMapping::new("9q8yyk8yt", "golden-gate-view"))
            .unwrap();

        let premium = store.premium_by_phrase("golden-gate-view").unwrap().unwrap();
        assert_eq!(premium.geohash, "9q8yyk8yt");
        // Exact match only
        assert!(store.premium_by_phrase("view-gate-golden").unwrap().is_none());
    }

    #[test]
    fn test_first_registration_owns_phrase() {
        let store = test_store();
        store
            .insert_premium(PremiumMapping::new("9q8yyk8yt", "same-words-twice"))
            .unwrap();
        store
            .insert_premium(PremiumMapping::new("gcpvj0duq", "same-words-twice"))
            .unwrap();

        let premium = store.premium_by_phrase("same-words-twice").unwrap().unwrap();
        assert_eq!(premium.geohash, "9q8yyk8yt");
    }

    #[test]
    fn test_word_mappings_paging() {
        let store = test_store();

        let first = store.word_mappings(0, 2).unwrap();
        assert_eq!(
            first,
            vec![WordMapping::new("8yt", "canyon"), WordMapping::new("9q8", "apple")]
        );

        let rest = store.word_mappings(2, 2).unwrap();
        assert_eq!(rest, vec![WordMapping::new("yyk", "river")]);

        assert!(store.word_mappings(10, 2).unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_registration_single_winner() {
        let store = Arc::new(test_store());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store.insert_premium(PremiumMapping::new(
                        "9q8yyk8yt",
                        format!("contender-number-{}", i),
                    ))
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();

        assert_eq!(winners, 1);
        assert_eq!(store.count_premium_mappings().unwrap(), 1);
    }

    #[test]
    fn test_journal_survives_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("premium.jsonl");
        let dictionary = Dictionary::from_pairs([("9q8", "apple")]);

        {
            let store = MemoryStore::with_journal(dictionary.clone(), &path).unwrap();
            store
                .insert_premium(PremiumMapping::new("9q8yyk8yt", "golden-gate-view"))
                .unwrap();
        }

        let store = MemoryStore::with_journal(dictionary, &path).unwrap();
        assert_eq!(store.count_premium_mappings().unwrap(), 1);
        assert_eq!(
            store.premium_by_phrase("golden-gate-view").unwrap().unwrap().geohash,
            "9q8yyk8yt"
        );
    }

    #[test]
    fn test_concurrent_journaled_registrations_all_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("premium.jsonl");
        let store = Arc::new(MemoryStore::with_journal(Dictionary::new(), &path).unwrap());
        let geohashes = ["9q8yyk8yt", "gcpvj0duq", "r3gx2f77b", "u09tunquc", "dr5regw3p"];

        let handles: Vec<_> = geohashes
            .iter()
            .enumerate()
            .map(|(i, geohash)| {
                let store = Arc::clone(&store);
                let geohash = geohash.to_string();
                let phrase = format!("place-number-{}", i);
                thread::spawn(move || store.insert_premium(PremiumMapping::new(geohash, phrase)))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(store.count_premium_mappings().unwrap(), geohashes.len());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), geohashes.len());

        drop(store);
        let reopened = MemoryStore::with_journal(Dictionary::new(), &path).unwrap();
        assert_eq!(reopened.count_premium_mappings().unwrap(), geohashes.len());
    }

    #[test]
    fn test_rejected_duplicate_is_not_journaled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("premium.jsonl");
        let store = MemoryStore::with_journal(Dictionary::new(), &path).unwrap();

        store
            .insert_premium(PremiumMapping::new("9q8yyk8yt", "golden-gate-view"))
            .unwrap();
        let _ = store.insert_premium(PremiumMapping::new("9q8yyk8yt", "other-phrase-here"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}
