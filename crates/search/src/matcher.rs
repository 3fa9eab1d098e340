//! Per-document query matching
//!
//! Reports which plus words of a query occur in one document. A single minus
//! word present in the document empties the match.

use crate::index::InvertedIndex;
use crate::query::{ExecutionPolicy, Query};
use lexis_core::{DocumentId, DocumentStatus, Error, Result, Term};
use rayon::prelude::*;

/// Plus words found in a document, with the document's status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedDocument {
    /// Matched terms, ascending and distinct
    pub terms: Vec<Term>,
    /// Status of the matched document
    pub status: DocumentStatus,
}

impl MatchedDocument {
    /// Check if no plus word matched
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Match a parsed query against one document
///
/// The returned terms are handles into the index and stay valid after the
/// document is removed. With `ExecutionPolicy::Parallel` the query may carry
/// duplicate words; the result is sorted and deduplicated either way.
///
/// # Errors
///
/// Returns `OutOfRange` if `id` is not a live document.
pub fn match_document(
    index: &InvertedIndex,
    query: &Query<'_>,
    id: DocumentId,
    policy: ExecutionPolicy,
) -> Result<MatchedDocument> {
    let record = index
        .document(id)
        .ok_or_else(|| Error::out_of_range(format!("Document {} is not indexed", id)))?;
    let status = record.status;

    let terms = match policy {
        ExecutionPolicy::Sequential => {
            if query
                .minus_words
                .iter()
                .any(|word| index.contains_posting(word, id))
            {
                Vec::new()
            } else {
                query
                    .plus_words
                    .iter()
                    .filter_map(|word| index.matched_term(word, id))
                    .collect()
            }
        }
        ExecutionPolicy::Parallel => {
            if query
                .minus_words
                .par_iter()
                .any(|word| index.contains_posting(word, id))
            {
                Vec::new()
            } else {
                let mut terms: Vec<Term> = query
                    .plus_words
                    .par_iter()
                    .filter_map(|word| index.matched_term(word, id))
                    .collect();
                terms.sort_unstable();
                terms.dedup();
                terms
            }
        }
    };

    Ok(MatchedDocument { terms, status })
}
