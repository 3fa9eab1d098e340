//! Search server: the public entry point of the engine
//!
//! Owns the stop-word set and the inverted index, validates raw query text
//! and dispatches to the ranker and matcher under the chosen execution
//! policy.
//!
//! # Thread Safety
//!
//! All read operations take `&self` and may run concurrently (see
//! [`crate::batch`]). Mutations take `&mut self`, so the borrow checker
//! keeps readers and writers apart.

use crate::index::{DocumentIds, InvertedIndex, WordFrequencies};
use crate::matcher::{self, MatchedDocument};
use crate::query::{parse_query, ExecutionPolicy};
use crate::ranker;
use crate::tokenizer::StopWords;
use lexis_core::{
    Document, DocumentId, DocumentPredicate, DocumentStatus, Error, Rating, Result,
    SearchConfig, DEFAULT_SCORE_BUCKETS, MAX_RESULT_DOCUMENT_COUNT,
};
use std::time::Instant;

/// Full-text search server over an in-memory TF-IDF index
///
/// # Example
///
/// ```
/// use lexis_search::SearchServer;
/// use lexis_core::DocumentStatus;
///
/// let mut server = SearchServer::from_stop_words_text("in the").unwrap();
/// server.add_document(1, "cat in the city", DocumentStatus::Active, &[5]).unwrap();
/// server.add_document(2, "dog in the park", DocumentStatus::Active, &[3]).unwrap();
///
/// let found = server.find_top_documents("cat").unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id, 1);
/// ```
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    score_buckets: usize,
}

impl SearchServer {
    /// Create a server with the given stop words
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any stop word is empty or contains a
    /// control character.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_stop_words(StopWords::new(stop_words)?, DEFAULT_SCORE_BUCKETS))
    }

    /// Create a server from space-separated stop words
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Ok(Self::with_stop_words(StopWords::from_text(text)?, DEFAULT_SCORE_BUCKETS))
    }

    /// Create a server from a loaded configuration
    ///
    /// # Errors
    ///
    /// Returns `Config` if the numeric settings are invalid, or
    /// `InvalidArgument` for a bad stop word.
    pub fn with_config(config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        let stop_words = StopWords::new(&config.stop_words)?;
        Ok(Self::with_stop_words(stop_words, config.score_buckets))
    }

    fn with_stop_words(stop_words: StopWords, score_buckets: usize) -> Self {
        SearchServer {
            stop_words,
            index: InvertedIndex::new(),
            score_buckets,
        }
    }

    /// Stop words in effect
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Index a document
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `id` is negative or already present, or
    /// if the text contains a control character. The index is unchanged on
    /// error.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[Rating],
    ) -> Result<()> {
        self.index
            .add_document(id, text, status, ratings, &self.stop_words)
    }

    /// Remove a document. NOOP for an unknown id.
    pub fn remove_document(&mut self, id: DocumentId) {
        self.remove_document_with(ExecutionPolicy::Sequential, id);
    }

    /// Remove a document under the given policy. NOOP for an unknown id.
    pub fn remove_document_with(&mut self, policy: ExecutionPolicy, id: DocumentId) {
        self.index.remove_document(id, policy);
    }

    // ========================================================================
    // Ranking
    // ========================================================================

    /// Top documents with status `Active`
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with(
            ExecutionPolicy::Sequential,
            raw_query,
            DocumentStatus::Active,
        )
    }

    /// Top documents with the given status
    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with(ExecutionPolicy::Sequential, raw_query, status)
    }

    /// Top documents accepted by a predicate over (id, status, rating)
    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        self.find_top_documents_with(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    /// Rank documents for a query
    ///
    /// Returns at most `MAX_RESULT_DOCUMENT_COUNT` documents, by relevance
    /// descending; relevances within `RELEVANCE_EPSILON` are ordered by
    /// rating descending. Both policies return the same documents in the
    /// same order.
    ///
    /// `status` may be passed directly as the predicate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a malformed query word.
    pub fn find_top_documents_with<P>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let start = Instant::now();
        // Ranking always uses the deduplicated form: a repeated plus word
        // would otherwise be scored twice.
        let query = parse_query(raw_query, &self.stop_words, ExecutionPolicy::Sequential)?;
        let candidates =
            ranker::find_all_documents(&self.index, &query, &predicate, policy, self.score_buckets);
        let candidate_count = candidates.len();
        let top = ranker::select_top_documents(candidates, MAX_RESULT_DOCUMENT_COUNT);

        tracing::debug!(
            target: "lexis::search",
            plus_words = query.plus_words.len(),
            minus_words = query.minus_words.len(),
            candidates = candidate_count,
            returned = top.len(),
            ?policy,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query ranked"
        );
        Ok(top)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Plus words of the query present in a document
    pub fn match_document(&self, raw_query: &str, id: DocumentId) -> Result<MatchedDocument> {
        self.match_document_with(ExecutionPolicy::Sequential, raw_query, id)
    }

    /// Plus words of the query present in a document, under the given policy
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `id` is not a live document, checked before
    /// the query is parsed. Returns `InvalidArgument` for a malformed query
    /// word.
    pub fn match_document_with(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<MatchedDocument> {
        if !self.index.contains_document(id) {
            return Err(Error::out_of_range(format!(
                "Document {} is not indexed",
                id
            )));
        }
        let query = parse_query(raw_query, &self.stop_words, policy)?;
        matcher::match_document(&self.index, &query, id, policy)
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Number of live documents
    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Term frequencies of a document; empty for an unknown id
    pub fn word_frequencies(&self, id: DocumentId) -> &WordFrequencies {
        self.index.word_frequencies(id)
    }

    /// Live document ids in ascending order
    pub fn document_ids(&self) -> DocumentIds<'_> {
        self.index.document_ids()
    }

    /// Stored text of a live document
    pub fn document_text(&self, id: DocumentId) -> Option<&str> {
        self.index.document(id).map(|record| record.text())
    }

    /// Underlying index
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocumentId;
    type IntoIter = DocumentIds<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.index.document_ids()
    }
}
