//! TF-IDF ranking
//!
//! For each plus word with postings, `idf = ln(N / df)` and every accepted
//! posting adds `tf * idf` to its document's relevance. Documents with a
//! posting for any minus word are then dropped, whatever their score.
//!
//! The parallel path fans plus words and minus words out over rayon workers
//! and accumulates into a [`ConcurrentMap`]; its ordered snapshot is the only
//! barrier between accumulation and output. Both paths produce candidates in
//! ascending id order, so ranking ties resolve identically.

use crate::index::InvertedIndex;
use crate::query::{ExecutionPolicy, Query};
use lexis_concurrency::ConcurrentMap;
use lexis_core::{Document, DocumentId, DocumentPredicate, RELEVANCE_EPSILON};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Score every document matching the query, in ascending id order
pub fn find_all_documents<P>(
    index: &InvertedIndex,
    query: &Query<'_>,
    predicate: &P,
    policy: ExecutionPolicy,
    score_buckets: usize,
) -> Vec<Document>
where
    P: DocumentPredicate + ?Sized,
{
    let relevance = match policy {
        ExecutionPolicy::Sequential => accumulate_sequential(index, query, predicate),
        ExecutionPolicy::Parallel => accumulate_parallel(index, query, predicate, score_buckets),
    };

    relevance
        .into_iter()
        .filter_map(|(id, relevance)| {
            index
                .document(id)
                .map(|record| Document::new(id, relevance, record.rating))
        })
        .collect()
}

fn accumulate_sequential<P>(
    index: &InvertedIndex,
    query: &Query<'_>,
    predicate: &P,
) -> BTreeMap<DocumentId, f64>
where
    P: DocumentPredicate + ?Sized,
{
    let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();
    for word in &query.plus_words {
        let Some(postings) = index.postings(word) else {
            continue;
        };
        let idf = index.inverse_document_freq(postings.len());
        for (&id, &tf) in postings.iter() {
            let Some(record) = index.document(id) else {
                continue;
            };
            if predicate.accept(id, record.status, record.rating) {
                *relevance.entry(id).or_default() += tf * idf;
            }
        }
    }

    for word in &query.minus_words {
        let Some(postings) = index.postings(word) else {
            continue;
        };
        for id in postings.keys() {
            relevance.remove(id);
        }
    }
    relevance
}

fn accumulate_parallel<P>(
    index: &InvertedIndex,
    query: &Query<'_>,
    predicate: &P,
    score_buckets: usize,
) -> BTreeMap<DocumentId, f64>
where
    P: DocumentPredicate + ?Sized,
{
    let relevance: ConcurrentMap<DocumentId, f64> = ConcurrentMap::new(score_buckets);

    query.plus_words.par_iter().for_each(|word| {
        let Some(postings) = index.postings(word) else {
            return;
        };
        let idf = index.inverse_document_freq(postings.len());
        for (&id, &tf) in postings.iter() {
            let Some(record) = index.document(id) else {
                continue;
            };
            if predicate.accept(id, record.status, record.rating) {
                *relevance.access(id) += tf * idf;
            }
        }
    });

    query.minus_words.par_iter().for_each(|word| {
        let Some(postings) = index.postings(word) else {
            return;
        };
        for &id in postings.keys() {
            relevance.erase(id);
        }
    });

    relevance.build_ordinary_map()
}

/// True if `lhs` ranks strictly ahead of `rhs`
///
/// Relevance descending; relevance within `RELEVANCE_EPSILON` falls back to
/// rating descending.
pub fn ranks_before(lhs: &Document, rhs: &Document) -> bool {
    if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
        lhs.rating > rhs.rating
    } else {
        lhs.relevance > rhs.relevance
    }
}

/// Take the `limit` best documents in ranking order
///
/// Repeatedly extracts the first best remaining document. This keeps input
/// order among equals, like a stable sort, and stays well-defined when
/// near-equal relevances make the epsilon comparison intransitive.
pub fn select_top_documents(mut documents: Vec<Document>, limit: usize) -> Vec<Document> {
    let mut top = Vec::with_capacity(limit.min(documents.len()));
    while top.len() < limit && !documents.is_empty() {
        let mut best = 0;
        for candidate in 1..documents.len() {
            if ranks_before(&documents[candidate], &documents[best]) {
                best = candidate;
            }
        }
        top.push(documents.remove(best));
    }
    top
}
