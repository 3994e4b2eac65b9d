//! Resolver error types.
//!
//! Display strings double as the user-facing response messages.

use thiserror::Error;

use crate::geohash::GeohashError;
use crate::store::StoreError;

/// Errors returned by [`PhraseResolver`](super::PhraseResolver) operations.
///
/// Every variant is recoverable at the request boundary.
#[derive(Debug, Error)]
pub enum VocabError {
    /// Latitude or longitude out of range or not a number
    #[error("Invalid coordinates ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Required input was empty ("Geo Hash" or "Magic Words")
    #[error("Empty {0} Value")]
    EmptyValue(&'static str),

    /// Bad alphabet or wrong length for the operation
    #[error("{0}")]
    InvalidGeohash(String),

    /// Not exactly three dash-delimited words
    #[error("Kindly enter the right format. Eg. word1-word2-word3")]
    MalformedPhrase,

    /// Fewer than three segments resolved to words
    #[error("Could not generate geovocab for this location")]
    UnresolvedLocation { geohash: String },

    /// Fewer than three words resolved to segments
    #[error("Could not find a location associated to the geovocab")]
    UnresolvedPhrase { phrase: String },

    /// Every word of a premium phrase is already an ordinary word
    #[error("These words are already mapped to another location")]
    WordsAlreadyMapped,

    /// A premium mapping already exists for the geohash
    #[error("Premium geovocab already exists for geohash '{0}'")]
    DuplicateKey(String),

    /// Store transport failure
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl VocabError {
    /// Response status for this error.
    ///
    /// Input and resolution problems are client errors; store failures are
    /// server errors.
    pub fn status(&self) -> u16 {
        match self {
            VocabError::Store(_) => 500,
            _ => 400,
        }
    }
}

impl From<StoreError> for VocabError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateKey(geohash) => VocabError::DuplicateKey(geohash),
            other => VocabError::Store(other),
        }
    }
}

impl From<GeohashError> for VocabError {
    fn from(e: GeohashError) -> Self {
        match e {
            GeohashError::InvalidLatitude(lat) => {
                VocabError::InvalidCoordinate { lat, lon: f64::NAN }
            }
            GeohashError::InvalidLongitude(lon) => {
                VocabError::InvalidCoordinate { lat: f64::NAN, lon }
            }
            other => VocabError::InvalidGeohash(other.to_string()),
        }
    }
}
