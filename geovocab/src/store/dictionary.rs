//! Segment dictionary and its bootstrap loader.
//!
//! The dictionary file is a line-based text format:
//! - One mapping per line: `segment,word` (comma, tab or whitespace separated)
//! - Blank lines and lines starting with `#` are ignored
//! - An optional `hashVal,word` header line is skipped
//!
//! Segments are normalized to lowercase. The mapping is one-to-one, so a
//! repeated segment or a repeated word is skipped with a warning and the
//! first occurrence wins.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::segment::SEGMENT_LENGTH;
use crate::validation::{valid_geohash_alphabet, valid_geohash_length};
use crate::vocab::PHRASE_DELIMITER;

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Dictionary contains no usable word mappings")]
    Empty,
}

/// Reason a single entry was not added.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryRejected {
    #[error("expected 'segment,word'")]
    Malformed,
    #[error("segment '{0}' is not 3 geohash characters")]
    InvalidSegment(String),
    #[error("word '{0}' is empty or contains a delimiter or whitespace")]
    InvalidWord(String),
    #[error("segment '{segment}' already maps to '{existing}'")]
    DuplicateSegment { segment: String, existing: String },
    #[error("word '{word}' already maps to segment '{existing}'")]
    DuplicateWord { word: String, existing: String },
}

/// Immutable segment ↔ word reference data.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_segment: BTreeMap<String, String>,
    by_word: HashMap<String, String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from pairs, silently dropping rejected entries.
    pub fn from_pairs<S, W>(pairs: impl IntoIterator<Item = (S, W)>) -> Self
    where
        S: AsRef<str>,
        W: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for (segment, word) in pairs {
            let _ = dictionary.insert(segment.as_ref(), word.as_ref());
        }
        dictionary
    }

    /// Load a dictionary file.
    ///
    /// Fails if the file cannot be read or yields no usable mappings.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        let dictionary = Self::parse(file)?;
        tracing::info!(
            path = %path.display(),
            mappings = dictionary.len(),
            "Loaded segment dictionary"
        );
        Ok(dictionary)
    }

    /// Parse dictionary lines from a reader.
    ///
    /// Rejected lines are logged and skipped.
    pub fn parse<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new();
        let mut skipped = 0usize;

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((segment, word)) = split_entry(line) else {
                tracing::warn!(
                    line = index + 1,
                    "Skipping dictionary line: {}",
                    EntryRejected::Malformed
                );
                skipped += 1;
                continue;
            };
            if segment.eq_ignore_ascii_case("hashval") {
                continue;
            }

            if let Err(reason) = dictionary.insert(segment, word) {
                tracing::warn!(line = index + 1, "Skipping dictionary line: {}", reason);
                skipped += 1;
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "Some dictionary lines were not loaded");
        }
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(dictionary)
    }

    /// Add one mapping, enforcing the one-to-one invariant.
    pub fn insert(&mut self, segment: &str, word: &str) -> Result<(), EntryRejected> {
        if !valid_geohash_alphabet(segment) || !valid_geohash_length(segment, SEGMENT_LENGTH) {
            return Err(EntryRejected::InvalidSegment(segment.to_string()));
        }
        if word.is_empty() || word.contains(PHRASE_DELIMITER) || word.contains(char::is_whitespace)
        {
            return Err(EntryRejected::InvalidWord(word.to_string()));
        }

        let segment = segment.to_ascii_lowercase();
        if let Some(existing) = self.by_segment.get(&segment) {
            return Err(EntryRejected::DuplicateSegment {
                segment,
                existing: existing.clone(),
            });
        }
        if let Some(existing) = self.by_word.get(word) {
            return Err(EntryRejected::DuplicateWord {
                word: word.to_string(),
                existing: existing.clone(),
            });
        }

        self.by_word.insert(word.to_string(), segment.clone());
        self.by_segment.insert(segment, word.to_string());
        Ok(())
    }

    /// Word for a segment.
    pub fn word(&self, segment: &str) -> Option<&str> {
        self.by_segment.get(segment).map(String::as_str)
    }

    /// Segment for a word.
    pub fn segment(&self, word: &str) -> Option<&str> {
        self.by_word.get(word).map(String::as_str)
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.by_segment.len()
    }

    /// Whether the dictionary holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.by_segment.is_empty()
    }

    /// Mappings in ascending segment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_segment
            .iter()
            .map(|(segment, word)| (segment.as_str(), word.as_str()))
    }
}

/// Split a line on the first comma or tab, falling back to whitespace.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (segment, word) = line
        .split_once([',', '\t'])
        .or_else(|| line.split_once(char::is_whitespace))?;
    Some((segment.trim().trim_matches('"'), word.trim().trim_matches('"')))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# GeoVocab dictionary
hashVal,word
9q8,apple
yyk,river
8yt\tcanyon
gcp   lantern
";

    #[test]
    fn test_parse_mixed_separators() {
        let dictionary = Dictionary::parse(SAMPLE.as_bytes()).unwrap();

        assert_eq!(dictionary.len(), 4);
        assert_eq!(dictionary.word("9q8"), Some("apple"));
        assert_eq!(dictionary.word("8yt"), Some("canyon"));
        assert_eq!(dictionary.word("gcp"), Some("lantern"));
        assert_eq!(dictionary.segment("river"), Some("yyk"));
    }

    #[test]
    fn test_parse_quoted_values() {
        let dictionary = Dictionary::parse(r#""9q8","apple""#.as_bytes()).unwrap();
        assert_eq!(dictionary.word("9q8"), Some("apple"));
    }

    #[test]
    fn test_parse_skips_bad_lines() {
        let input = concat!(
            "9q8,apple\n",
            "noseparator\n",
            "abc,bad\n",
            "9q8,again\n",
            "yyk,apple\n",
            "yyk,two-words\n",
            "yyk,river\n",
        );
        let dictionary = Dictionary::parse(input.as_bytes()).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.word("9q8"), Some("apple"));
        assert_eq!(dictionary.word("yyk"), Some("river"));
    }

    #[test]
    fn test_parse_empty_is_error() {
        let result = Dictionary::parse("# nothing here\n\n".as_bytes());
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn test_segments_are_lowercased() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("9Q8", "apple").unwrap();
        assert_eq!(dictionary.word("9q8"), Some("apple"));
        assert_eq!(dictionary.segment("apple"), Some("9q8"));
    }

    #[test]
    fn test_insert_rejections() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("9q8", "apple").unwrap();

        assert_eq!(
            dictionary.insert("9qa", "pear"),
            Err(EntryRejected::InvalidSegment("9qa".to_string()))
        );
        assert_eq!(
            dictionary.insert("9q8z", "pear"),
            Err(EntryRejected::InvalidSegment("9q8z".to_string()))
        );
        assert_eq!(
            dictionary.insert("yyk", ""),
            Err(EntryRejected::InvalidWord(String::new()))
        );
        assert_eq!(
            dictionary.insert("9q8", "pear"),
            Err(EntryRejected::DuplicateSegment {
                segment: "9q8".to_string(),
                existing: "apple".to_string()
            })
        );
        assert_eq!(
            dictionary.insert("yyk", "apple"),
            Err(EntryRejected::DuplicateWord {
                word: "apple".to_string(),
                existing: "9q8".to_string()
            })
        );
    }

    #[test]
    fn test_iter_is_sorted_by_segment() {
        let dictionary =
            Dictionary::from_pairs([("yyk", "river"), ("8yt", "canyon"), ("9q8", "apple")]);
        let segments: Vec<&str> = dictionary.iter().map(|(s, _)| s).collect();
        assert_eq!(segments, vec!["8yt", "9q8", "yyk"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dictionary.csv");
        std::fs::write(&path, SAMPLE).unwrap();

        let dictionary = Dictionary::load(&path).unwrap();
        assert_eq!(dictionary.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Dictionary::load(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }
}
