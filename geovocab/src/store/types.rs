//! Core types for the lookup store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An ordinary segment-to-word assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMapping {
    /// Three-character geohash segment
    #[serde(rename = "hashVal")]
    pub segment: String,
    /// Word assigned to the segment
    pub word: String,
}

impl WordMapping {
    /// Create a new word mapping.
    pub fn new(segment: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            word: word.into(),
        }
    }
}

/// An explicit full-geohash to phrase override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumMapping {
    /// Full 9-character geohash (primary key)
    #[serde(rename = "geoHash")]
    pub geohash: String,
    /// Three dash-joined words
    #[serde(rename = "magicwords")]
    pub phrase: String,
}

impl PremiumMapping {
    /// Create a new premium mapping.
    pub fn new(geohash: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self {
            geohash: geohash.into(),
            phrase: phrase.into(),
        }
    }
}

/// Store-related errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Uniqueness violation on the premium geohash key
    #[error("Premium geohash '{0}' is already registered")]
    DuplicateKey(String),

    /// Failed to read or append the premium journal
    #[error("Premium journal I/O error: {0}")]
    Journal(#[from] std::io::Error),

    /// Journal entry could not be encoded or decoded
    #[error("Premium journal entry is malformed at line {line}: {message}")]
    MalformedEntry { line: usize, message: String },

    /// Store is not usable (e.g. a poisoned lock)
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
