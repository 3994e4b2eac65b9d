//! Three-word phrase value type.

use std::fmt;
use std::str::FromStr;

use super::error::VocabError;

/// Separator between phrase words.
pub const PHRASE_DELIMITER: char = '-';

/// Words in every phrase.
pub const WORD_COUNT: usize = 3;

/// Exactly three non-empty words, kept in input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase {
    words: [String; WORD_COUNT],
}

impl Phrase {
    /// Parse a dash-delimited phrase.
    ///
    /// Fails with [`VocabError::MalformedPhrase`] unless the input splits
    /// into exactly three non-empty words.
    pub fn parse(input: &str) -> Result<Self, VocabError> {
        let mut parts = input.split(PHRASE_DELIMITER);
        let words = [parts.next(), parts.next(), parts.next()];

        match (words, parts.next()) {
            ([Some(a), Some(b), Some(c)], None)
                if !a.is_empty() && !b.is_empty() && !c.is_empty() =>
            {
                Ok(Self {
                    words: [a.to_string(), b.to_string(), c.to_string()],
                })
            }
            _ => Err(VocabError::MalformedPhrase),
        }
    }

    /// Build a phrase from three words in order.
    pub fn from_words(words: [&str; WORD_COUNT]) -> Result<Self, VocabError> {
        if words
            .iter()
            .any(|w| w.is_empty() || w.contains(PHRASE_DELIMITER))
        {
            return Err(VocabError::MalformedPhrase);
        }
        Ok(Self {
            words: words.map(str::to_string),
        })
    }

    /// The words in phrase order.
    pub fn words(&self) -> [&str; WORD_COUNT] {
        [&self.words[0], &self.words[1], &self.words[2]]
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}",
            self.words[0],
            self.words[1],
            self.words[2],
            d = PHRASE_DELIMITER
        )
    }
}

impl FromStr for Phrase {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
