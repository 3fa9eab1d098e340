//! Query parsing
//!
//! A query is a space-separated list of words. A word prefixed with `-` is a
//! minus word: documents containing it are excluded. Every other word is a
//! plus word and contributes to relevance.

use crate::tokenizer::{is_valid_word, split_into_words, StopWords};
use lexis_core::{Error, Result};

/// How an operation dispatches its work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionPolicy {
    /// Run on the calling thread
    #[default]
    Sequential,
    /// Fan out over the rayon thread pool and join before returning
    Parallel,
}

/// Parsed query borrowing its words from the raw query text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'q> {
    /// Words that contribute to relevance
    pub plus_words: Vec<&'q str>,
    /// Words whose presence excludes a document
    pub minus_words: Vec<&'q str>,
}

impl<'q> Query<'q> {
    /// Check if the query has no plus and no minus words
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

#[derive(Debug)]
struct QueryWord<'q> {
    data: &'q str,
    is_minus: bool,
    is_stop: bool,
}

fn parse_query_word<'q>(text: &'q str, stop_words: &StopWords) -> Result<QueryWord<'q>> {
    let (data, is_minus) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    if data.is_empty() || data.starts_with('-') || !is_valid_word(data) {
        return Err(Error::invalid_argument(format!(
            "Query word {:?} is invalid",
            text
        )));
    }
    Ok(QueryWord {
        data,
        is_minus,
        is_stop: stop_words.contains(data),
    })
}

/// Parse raw query text
///
/// With `ExecutionPolicy::Sequential` both word lists are sorted and
/// deduplicated. With `ExecutionPolicy::Parallel` they keep parse order and
/// duplicates; consumers deduplicate their own output.
///
/// # Errors
///
/// Returns `InvalidArgument` for a bare `-`, a word starting with `--`, or a
/// word containing a control character.
pub fn parse_query<'q>(
    text: &'q str,
    stop_words: &StopWords,
    policy: ExecutionPolicy,
) -> Result<Query<'q>> {
    let mut query = Query::default();
    for word in split_into_words(text) {
        let query_word = parse_query_word(word, stop_words)?;
        if query_word.is_stop {
            continue;
        }
        if query_word.is_minus {
            query.minus_words.push(query_word.data);
        } else {
            query.plus_words.push(query_word.data);
        }
    }

    if policy == ExecutionPolicy::Sequential {
        query.plus_words.sort_unstable();
        query.plus_words.dedup();
        query.minus_words.sort_unstable();
        query.minus_words.dedup();
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_words() -> StopWords {
        StopWords::from_text("in the").unwrap()
    }

    #[test]
    fn test_parse_plus_and_minus() {
        let query = parse_query("cat -dog city", &stop_words(), ExecutionPolicy::Sequential)
            .unwrap();
        assert_eq!(query.plus_words, vec!["cat", "city"]);
        assert_eq!(query.minus_words, vec!["dog"]);
    }

    #[test]
    fn test_sequential_sorts_and_dedups() {
        let query = parse_query(
            "zebra cat zebra -b -a -b",
            &StopWords::default(),
            ExecutionPolicy::Sequential,
        )
        .unwrap();
        assert_eq!(query.plus_words, vec!["cat", "zebra"]);
        assert_eq!(query.minus_words, vec!["a", "b"]);
    }

    #[test]
    fn test_parallel_keeps_parse_order() {
        let query = parse_query(
            "zebra cat zebra -b -a -b",
            &StopWords::default(),
            ExecutionPolicy::Parallel,
        )
        .unwrap();
        assert_eq!(query.plus_words, vec!["zebra", "cat", "zebra"]);
        assert_eq!(query.minus_words, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_stop_words_dropped() {
        let query = parse_query("cat in the -in city", &stop_words(), ExecutionPolicy::Sequential)
            .unwrap();
        assert_eq!(query.plus_words, vec!["cat", "city"]);
        assert!(query.minus_words.is_empty());
    }

    #[test]
    fn test_bare_minus_rejected() {
        let err = parse_query("cat -", &stop_words(), ExecutionPolicy::Sequential).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_double_minus_rejected() {
        let err =
            parse_query("--cat", &stop_words(), ExecutionPolicy::Sequential).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_control_char_rejected() {
        let err = parse_query("ca\u{2}t", &stop_words(), ExecutionPolicy::Parallel).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_inner_hyphen_allowed() {
        let query =
            parse_query("well-known -x-ray", &stop_words(), ExecutionPolicy::Sequential).unwrap();
        assert_eq!(query.plus_words, vec!["well-known"]);
        assert_eq!(query.minus_words, vec!["x-ray"]);
    }

    #[test]
    fn test_empty_query() {
        let query = parse_query("   ", &stop_words(), ExecutionPolicy::Sequential).unwrap();
        assert!(query.is_empty());
    }
}
