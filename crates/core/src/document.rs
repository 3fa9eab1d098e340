//! Document identity, lifecycle tags and ranked results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document identifier. Valid ids are non-negative.
pub type DocumentId = i32;

/// Document rating: the truncated mean of the caller's rating samples.
pub type Rating = i32;

/// Caller-assigned classification of a document
///
/// The engine never changes a document's status; it only filters on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Current document, the default ranking filter
    #[default]
    Active,
    /// Outdated or off-topic
    Irrelevant,
    /// Blocked from results by policy
    Banned,
    /// Marked as removed by the caller (still indexed)
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Active => "active",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        };
        f.write_str(name)
    }
}

/// A ranked search result
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: DocumentId,
    /// TF-IDF relevance for the query that produced this result
    pub relevance: f64,
    /// Document rating
    pub rating: Rating,
}

impl Document {
    /// Create a new result
    pub fn new(id: DocumentId, relevance: f64, rating: Rating) -> Self {
        Document {
            id,
            relevance,
            rating,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Filter applied to every candidate document during ranking
///
/// Implemented for any `Fn(DocumentId, DocumentStatus, Rating) -> bool` and
/// for `DocumentStatus` itself (status equality). Predicates must be `Sync`
/// because parallel ranking evaluates them from worker threads.
pub trait DocumentPredicate: Sync {
    /// Return true if the document may appear in results
    fn accept(&self, id: DocumentId, status: DocumentStatus, rating: Rating) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocumentId, DocumentStatus, Rating) -> bool + Sync,
{
    fn accept(&self, id: DocumentId, status: DocumentStatus, rating: Rating) -> bool {
        self(id, status, rating)
    }
}

impl DocumentPredicate for DocumentStatus {
    fn accept(&self, _id: DocumentId, status: DocumentStatus, _rating: Rating) -> bool {
        status == *self
    }
}

/// Arithmetic mean of the samples, truncated toward zero. Empty input is 0.
pub fn compute_average_rating(ratings: &[Rating]) -> Rating {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as Rating
}
