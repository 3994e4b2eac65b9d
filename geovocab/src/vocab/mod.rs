//! Word-phrase resolution.
//!
//! Turns coordinates into a three-word phrase and back:
//!
//! ```text
//! (lat, lon) → encode(9) → "9q8yyk8yt" → ["9q8", "yyk", "8yt"] → "apple-river-canyon"
//! ```
//!
//! A premium mapping for the full geohash (or the exact phrase) overrides
//! segment composition. Composition never returns partial results: all
//! three segments (or words) must resolve.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use geovocab::store::{Dictionary, MemoryStore};
//! use geovocab::vocab::PhraseResolver;
//!
//! let dictionary =
//!     Dictionary::from_pairs([("9q8", "apple"), ("yyk", "river"), ("8yt", "canyon")]);
//! let resolver = PhraseResolver::new(Arc::new(MemoryStore::new(dictionary)));
//!
//! let location = resolver.coordinates_to_phrase(37.7749, -122.4194).unwrap();
//! assert_eq!(location.phrase, "apple-river-canyon");
//! assert_eq!(location.geohash, "9q8yyk8yt");
//!
//! let back = resolver.phrase_to_coordinates("apple-river-canyon").unwrap();
//! assert_eq!((back.latitude, back.longitude), (location.latitude, location.longitude));
//! ```

mod error;
mod phrase;
mod resolver;

pub use error::VocabError;
pub use phrase::{Phrase, PHRASE_DELIMITER, WORD_COUNT};
pub use resolver::{Location, PhraseResolver, PhraseSource};
