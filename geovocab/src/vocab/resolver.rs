//! Phrase resolver over an injected lookup store.

use std::sync::Arc;

use serde::Serialize;

use super::error::VocabError;
use super::phrase::{Phrase, PHRASE_DELIMITER, WORD_COUNT};
use crate::geohash::{self, DEFAULT_PRECISION, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::segment::{self, SEGMENT_COUNT, SEGMENT_LENGTH};
use crate::store::{LookupStore, PremiumMapping};
use crate::validation::{valid_geohash_alphabet, valid_geohash_length, PREMIUM_GEOHASH_LENGTH};

/// Where a resolved phrase came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseSource {
    /// A registered premium mapping
    Premium,
    /// Composed from three segment words
    Composed,
}

/// A resolved location.
///
/// Serializes with the field names clients already consume
/// (`geoVocab`, `geoHash`, `latitude`, `longitude`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    #[serde(rename = "geoVocab")]
    pub phrase: String,
    #[serde(rename = "geoHash")]
    pub geohash: String,
    /// Rounded to the precision of the geohash
    pub latitude: f64,
    /// Rounded to the precision of the geohash
    pub longitude: f64,
    #[serde(skip)]
    pub source: PhraseSource,
}

impl Location {
    fn from_geohash(
        phrase: String,
        geohash: String,
        source: PhraseSource,
    ) -> Result<Self, VocabError> {
        let (latitude, longitude) = geohash::decode(&geohash)?;
        Ok(Self {
            phrase,
            geohash,
            latitude,
            longitude,
            source,
        })
    }
}

/// Resolves coordinates to phrases and phrases to coordinates.
///
/// Holds no mutable state of its own; every lookup goes to the store.
#[derive(Clone)]
pub struct PhraseResolver {
    store: Arc<dyn LookupStore>,
}

impl PhraseResolver {
    /// Create a resolver over a store.
    pub fn new(store: Arc<dyn LookupStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn LookupStore> {
        &self.store
    }

    /// Resolve coordinates to a phrase.
    ///
    /// The returned coordinate is the decoded, rounded center of the
    /// 9-character cell, not the raw input. A premium mapping for the
    /// geohash wins over composition.
    ///
    /// # Errors
    ///
    /// * [`VocabError::InvalidCoordinate`] - out of range or not a number
    /// * [`VocabError::UnresolvedLocation`] - fewer than three distinct
    ///   segments have words
    pub fn coordinates_to_phrase(&self, lat: f64, lon: f64) -> Result<Location, VocabError> {
        if !(MIN_LAT..=MAX_LAT).contains(&lat) || !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(VocabError::InvalidCoordinate { lat, lon });
        }

        let geohash = geohash::encode(lat, lon, DEFAULT_PRECISION)?;

        if let Some(premium) = self.store.premium_by_geohash(&geohash)? {
            return Location::from_geohash(premium.phrase, geohash, PhraseSource::Premium);
        }

        let segments = segment::split(&geohash, SEGMENT_LENGTH);
        let words = self.store.words_by_segments(&segments)?;

        // Repeated segments collapse in the set lookup and count as unresolved
        if segments.len() != SEGMENT_COUNT || words.len() != SEGMENT_COUNT {
            return Err(VocabError::UnresolvedLocation { geohash });
        }

        let ordered: Option<Vec<&str>> = segments
            .iter()
            .map(|s| words.get(*s).map(String::as_str))
            .collect();
        let Some(ordered) = ordered else {
            return Err(VocabError::UnresolvedLocation { geohash });
        };

        let phrase = ordered.join(&PHRASE_DELIMITER.to_string());
        Location::from_geohash(phrase, geohash, PhraseSource::Composed)
    }

    /// Resolve a phrase to coordinates.
    ///
    /// A premium mapping registered under the exact phrase wins. Otherwise
    /// each word is looked up and the geohash is rebuilt in the order the
    /// words appear in `phrase`.
    ///
    /// # Errors
    ///
    /// * [`VocabError::MalformedPhrase`] - not three non-empty words
    /// * [`VocabError::UnresolvedPhrase`] - fewer than three distinct words
    ///   resolve
    pub fn phrase_to_coordinates(&self, phrase: &str) -> Result<Location, VocabError> {
        let parsed = Phrase::parse(phrase)?;

        if let Some(premium) = self.store.premium_by_phrase(phrase)? {
            return Location::from_geohash(premium.phrase, premium.geohash, PhraseSource::Premium);
        }

        let words = parsed.words();
        let segments = self.store.segments_by_words(&words)?;
        if segments.len() != WORD_COUNT {
            return Err(VocabError::UnresolvedPhrase {
                phrase: phrase.to_string(),
            });
        }

        let mut geohash = String::with_capacity(DEFAULT_PRECISION);
        for word in words {
            let segment = segments
                .get(word)
                .ok_or_else(|| VocabError::UnresolvedPhrase {
                    phrase: phrase.to_string(),
                })?;
            geohash.push_str(segment);
        }

        Location::from_geohash(phrase.to_string(), geohash, PhraseSource::Composed)
    }

    /// Register a premium phrase for a full geohash.
    ///
    /// Inputs are checked in order: empty geohash, empty phrase, phrase
    /// shape, geohash alphabet, geohash length. The geohash is stored
    /// lowercase.
    ///
    /// Only a phrase whose three words are all ordinary dictionary words is
    /// refused; reusing one or two of them is allowed.
    ///
    /// # Errors
    ///
    /// * [`VocabError::EmptyValue`], [`VocabError::MalformedPhrase`],
    ///   [`VocabError::InvalidGeohash`] - input checks
    /// * [`VocabError::WordsAlreadyMapped`] - all three words are taken
    /// * [`VocabError::DuplicateKey`] - the geohash already has a premium phrase
    pub fn register_premium(
        &self,
        geohash: &str,
        phrase: &str,
    ) -> Result<PremiumMapping, VocabError> {
        if geohash.is_empty() {
            return Err(VocabError::EmptyValue("Geo Hash"));
        }
        if phrase.is_empty() {
            return Err(VocabError::EmptyValue("Magic Words"));
        }
        let parsed = Phrase::parse(phrase)?;
        if !valid_geohash_alphabet(geohash) {
            return Err(VocabError::InvalidGeohash("Invalid GeoHash".to_string()));
        }
        if !valid_geohash_length(geohash, PREMIUM_GEOHASH_LENGTH) {
            return Err(VocabError::InvalidGeohash(format!(
                "Geohash should be {} characters long",
                PREMIUM_GEOHASH_LENGTH
            )));
        }

        let taken = self.store.segments_by_words(&parsed.words())?;
        if taken.len() == WORD_COUNT {
            return Err(VocabError::WordsAlreadyMapped);
        }

        let mapping = PremiumMapping::new(geohash.to_ascii_lowercase(), phrase);
        self.store.insert_premium(mapping.clone())?;
        Ok(mapping)
    }
}
