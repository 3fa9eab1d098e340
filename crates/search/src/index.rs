//! Inverted index with a mirrored forward index
//!
//! This module provides:
//! - InvertedIndex: document records, forward map and inverted map
//! - PostingList: document id -> term frequency for one term
//! - WordFrequencies: term -> term frequency for one document
//!
//! # Invariants
//!
//! - Every `(id, term, tf)` in the forward map has an identical
//!   `(term, id, tf)` in the inverted map, and vice versa
//! - Posting lists are never empty; a term whose last posting is erased is
//!   dropped, releasing its interned text
//! - Term frequencies are in (0, 1]
//!
//! # Thread Safety
//!
//! Postings live in a DashMap so that parallel removal can erase distinct
//! terms from worker threads, each locking only the term's shard. Mutation
//! otherwise requires `&mut self`; queries take `&self` and may run
//! concurrently with each other but never with a writer.

use crate::query::ExecutionPolicy;
use crate::tokenizer::StopWords;
use dashmap::mapref::one::Ref;
use dashmap::DashMap;
use lexis_core::{
    compute_average_rating, DocumentId, DocumentStatus, Error, Rating, Result, Term,
};
use rayon::prelude::*;
use std::collections::{btree_map, BTreeMap};
use std::iter::Copied;

/// Documents containing a term, with the term's frequency in each
pub type PostingList = BTreeMap<DocumentId, f64>;

/// Terms of a document, with their frequency in it
pub type WordFrequencies = BTreeMap<Term, f64>;

/// Iterator over live document ids, ascending
pub type DocumentIds<'a> = Copied<btree_map::Keys<'a, DocumentId, DocumentRecord>>;

static EMPTY_FREQUENCIES: WordFrequencies = BTreeMap::new();

/// Stored metadata and text of a live document
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    /// Truncated mean of the rating samples
    pub rating: Rating,
    /// Caller-assigned status
    pub status: DocumentStatus,
    text: Box<str>,
}

impl DocumentRecord {
    /// Original document text
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Inverted index over live documents
#[derive(Default)]
pub struct InvertedIndex {
    /// Term -> PostingList mapping
    postings: DashMap<Term, PostingList>,

    /// Document -> WordFrequencies mapping
    word_freqs: BTreeMap<DocumentId, WordFrequencies>,

    /// Live documents, ordered by id
    documents: BTreeMap<DocumentId, DocumentRecord>,
}

impl InvertedIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Index Updates
    // ========================================================================

    /// Index a document
    ///
    /// Each non-stop word occurrence adds `1 / word_count` to the frequency of
    /// its term. All validation happens before the index is touched, so a
    /// failed call leaves no partial postings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `id` is negative or already indexed, or if
    /// the text contains a word with a control character.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[Rating],
        stop_words: &StopWords,
    ) -> Result<()> {
        if id < 0 {
            return Err(Error::invalid_argument(format!(
                "Invalid document_id {}: ids must be non-negative",
                id
            )));
        }
        if self.documents.contains_key(&id) {
            return Err(Error::invalid_argument(format!(
                "Invalid document_id {}: already indexed",
                id
            )));
        }

        let words = stop_words.split_into_words_no_stop(text)?;
        let inv_word_count = 1.0 / words.len() as f64;
        let mut counted: BTreeMap<&str, f64> = BTreeMap::new();
        for word in &words {
            *counted.entry(*word).or_default() += inv_word_count;
        }

        let mut freqs = WordFrequencies::new();
        for (word, tf) in counted {
            let term = self.insert_posting(word, id, tf);
            freqs.insert(term, tf);
        }

        tracing::debug!(
            target: "lexis::search",
            document_id = id,
            words = words.len(),
            terms = freqs.len(),
            "Document indexed"
        );

        self.word_freqs.insert(id, freqs);
        self.documents.insert(
            id,
            DocumentRecord {
                rating: compute_average_rating(ratings),
                status,
                text: text.into(),
            },
        );
        Ok(())
    }

    /// Insert a posting and return the interned handle for `word`
    fn insert_posting(&self, word: &str, id: DocumentId, tf: f64) -> Term {
        if let Some(mut list) = self.postings.get_mut(word) {
            list.insert(id, tf);
            return list.key().clone();
        }
        let term = Term::new(word);
        self.postings
            .entry(term.clone())
            .or_default()
            .insert(id, tf);
        term
    }

    /// Erase the posting of `id` under `term`, dropping the term if it
    /// has no postings left
    fn erase_posting(&self, term: &str, id: DocumentId) {
        let now_empty = match self.postings.get_mut(term) {
            Some(mut list) => {
                list.remove(&id);
                list.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.postings.remove_if(term, |_, list| list.is_empty());
        }
    }

    /// Remove a document from the index
    ///
    /// NOOP for an unknown id. With `ExecutionPolicy::Parallel` the terms of
    /// the document are collected first and their postings are erased from
    /// worker threads; each worker touches a distinct term. The forward entry
    /// and the record are dropped on the calling thread after all workers
    /// finish.
    ///
    /// Returns true if a document was removed.
    pub fn remove_document(&mut self, id: DocumentId, policy: ExecutionPolicy) -> bool {
        if !self.documents.contains_key(&id) {
            return false;
        }

        let term_count = match self.word_freqs.get(&id) {
            Some(freqs) => {
                match policy {
                    ExecutionPolicy::Sequential => {
                        for term in freqs.keys() {
                            self.erase_posting(term, id);
                        }
                    }
                    ExecutionPolicy::Parallel => {
                        let terms: Vec<&Term> = freqs.keys().collect();
                        terms
                            .par_iter()
                            .for_each(|term| self.erase_posting(term.as_str(), id));
                    }
                }
                freqs.len()
            }
            None => 0,
        };

        self.word_freqs.remove(&id);
        self.documents.remove(&id);

        tracing::debug!(
            target: "lexis::search",
            document_id = id,
            terms = term_count,
            ?policy,
            "Document removed"
        );
        true
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of live documents
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct indexed terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of documents containing a term
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map(|list| list.len()).unwrap_or(0)
    }

    /// Inverse document frequency for a term with `postings_len` postings
    ///
    /// IDF(t) = ln(N / df)
    pub fn inverse_document_freq(&self, postings_len: usize) -> f64 {
        (self.document_count() as f64 / postings_len as f64).ln()
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Check if a document is live
    pub fn contains_document(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Record of a live document
    pub fn document(&self, id: DocumentId) -> Option<&DocumentRecord> {
        self.documents.get(&id)
    }

    /// Live document ids in ascending order
    pub fn document_ids(&self) -> DocumentIds<'_> {
        self.documents.keys().copied()
    }

    /// Term frequencies of a document; empty for an unknown id
    pub fn word_frequencies(&self, id: DocumentId) -> &WordFrequencies {
        self.word_freqs.get(&id).unwrap_or(&EMPTY_FREQUENCIES)
    }

    /// Borrow the posting list of a term
    ///
    /// Holds a read lock on the term's shard while the guard lives.
    pub(crate) fn postings(&self, term: &str) -> Option<Ref<'_, Term, PostingList>> {
        self.postings.get(term)
    }

    /// Copy of the posting list of a term
    ///
    /// Returns None if the term is not indexed.
    pub fn lookup(&self, term: &str) -> Option<PostingList> {
        self.postings.get(term).map(|list| list.clone())
    }

    /// Check if `id` has a posting under `term`
    pub fn contains_posting(&self, term: &str, id: DocumentId) -> bool {
        self.postings
            .get(term)
            .map(|list| list.contains_key(&id))
            .unwrap_or(false)
    }

    /// Interned handle for `term` if `id` has a posting under it
    pub(crate) fn matched_term(&self, term: &str, id: DocumentId) -> Option<Term> {
        let list = self.postings.get(term)?;
        list.contains_key(&id).then(|| list.key().clone())
    }

    /// All indexed terms, sorted
    pub fn terms(&self) -> Vec<Term> {
        let mut terms: Vec<Term> = self.postings.iter().map(|r| r.key().clone()).collect();
        terms.sort();
        terms
    }
}

// ============================================================================
// Tests
// ============================================================================
