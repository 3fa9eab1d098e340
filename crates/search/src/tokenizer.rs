//! Tokenizer and stop-word filtering
//!
//! Text is split on ASCII spaces only; runs of spaces produce no empty words.
//! A word is valid when it contains no control bytes (`0x00..0x20`), so tabs
//! and newlines are rejected rather than treated as separators.

use lexis_core::{Error, Result};
use rustc_hash::FxHashSet;

/// Split text into space-delimited words
///
/// # Example
///
/// ```
/// use lexis_search::tokenizer::split_into_words;
///
/// let words: Vec<&str> = split_into_words("  cat in  the city ").collect();
/// assert_eq!(words, vec!["cat", "in", "the", "city"]);
/// ```
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// Check that a word contains no control characters
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < b' ')
}

/// Immutable set of words excluded from indexing and queries
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl StopWords {
    /// Build a stop-word set from a collection of words
    ///
    /// Duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any entry is empty or contains a control
    /// character.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = FxHashSet::default();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(Error::invalid_argument("Stop word is empty"));
            }
            if !is_valid_word(word) {
                return Err(Error::invalid_argument(format!(
                    "Stop word {:?} contains a control character",
                    word
                )));
            }
            set.insert(word.to_owned());
        }
        Ok(StopWords { words: set })
    }

    /// Build a stop-word set from space-separated text
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(split_into_words(text))
    }

    /// Check if a word is a stop word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Split document text into indexable words
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any word contains a control character.
    /// Nothing is returned on failure, so callers can validate before mutating.
    pub fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let mut words = Vec::new();
        for word in split_into_words(text) {
            if !is_valid_word(word) {
                return Err(Error::invalid_argument(format!(
                    "Word {:?} is invalid",
                    word
                )));
            }
            if !self.contains(word) {
                words.push(word);
            }
        }
        Ok(words)
    }
}
