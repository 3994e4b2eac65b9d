//! Lookup store for segment words and premium phrases.
//!
//! The resolver only needs point lookups and small set lookups, so the store
//! is expressed as the [`LookupStore`] trait and injected as
//! `Arc<dyn LookupStore>`.
//!
//! # Architecture
//!
//! ```text
//! MemoryStore
//! ├── Dictionary (immutable after bootstrap)
//! │   ├── segment → word   ("9q8" → "apple")
//! │   └── word → segment   ("apple" → "9q8")
//! ├── Premium (DashMap, geohash primary key)
//! │   └── "9q8yyk8yt" → "golden-gate-view"
//! └── PremiumJournal (optional, append-only JSON lines)
//! ```
//!
//! # Usage
//!
//! ```
//! use geovocab::store::{Dictionary, LookupStore, MemoryStore};
//!
//! let dictionary = Dictionary::from_pairs([("9q8", "apple"), ("yyk", "river")]);
//! let store = MemoryStore::new(dictionary);
//!
//! assert_eq!(store.word_by_segment("9q8").unwrap().as_deref(), Some("apple"));
//! assert_eq!(store.count_word_mappings().unwrap(), 2);
//! ```

mod dictionary;
mod journal;
mod memory;
mod types;

use std::collections::HashMap;

pub use dictionary::{Dictionary, DictionaryError, EntryRejected};
pub use journal::PremiumJournal;
pub use memory::MemoryStore;
pub use types::{PremiumMapping, StoreError, WordMapping};

/// Key-value capability the resolver depends on.
///
/// Set lookups may return fewer entries than requested; the caller decides
/// whether a partial result is acceptable.
pub trait LookupStore: Send + Sync {
    /// Word assigned to a single segment.
    fn word_by_segment(&self, segment: &str) -> Result<Option<String>, StoreError>;

    /// Words for the given segments, keyed by segment.
    fn words_by_segments(&self, segments: &[&str]) -> Result<HashMap<String, String>, StoreError>;

    /// Segments for the given words, keyed by word.
    fn segments_by_words(&self, words: &[&str]) -> Result<HashMap<String, String>, StoreError>;

    /// Premium mapping registered for a full geohash.
    fn premium_by_geohash(&self, geohash: &str) -> Result<Option<PremiumMapping>, StoreError>;

    /// Premium mapping registered under an exact phrase.
    fn premium_by_phrase(&self, phrase: &str) -> Result<Option<PremiumMapping>, StoreError>;

    /// Inserts a premium mapping unless its geohash is already taken.
    ///
    /// Fails with [`StoreError::DuplicateKey`] when the geohash exists. The
    /// check and the insert are atomic.
    fn insert_premium(&self, mapping: PremiumMapping) -> Result<(), StoreError>;

    /// Ordinary mappings ordered by segment, for listing.
    fn word_mappings(&self, offset: usize, limit: usize) -> Result<Vec<WordMapping>, StoreError>;

    /// Number of ordinary segment mappings.
    fn count_word_mappings(&self) -> Result<usize, StoreError>;

    /// Number of premium mappings.
    fn count_premium_mappings(&self) -> Result<usize, StoreError>;
}
