//! Determinism and Consistency Tests
//!
//! Validates that sequential and parallel execution agree, and that repeated
//! operations produce identical results.

use lexis_core::{Document, DocumentId, DocumentStatus};
use lexis_search::{process_queries, ExecutionPolicy, SearchServer};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

const VOCABULARY: [&str; 12] = [
    "cat", "dog", "city", "hall", "house", "small", "big", "fluffy", "tail", "collar", "rat",
    "pet",
];

fn build_server(docs: &[(Vec<usize>, i32)]) -> SearchServer {
    let mut server = SearchServer::new(["pet"]).unwrap();
    for (id, (words, rating)) in docs.iter().enumerate() {
        let text: Vec<&str> = words.iter().map(|&w| VOCABULARY[w]).collect();
        let status = if id % 5 == 4 {
            DocumentStatus::Banned
        } else {
            DocumentStatus::Active
        };
        server
            .add_document(id as DocumentId, &text.join(" "), status, &[*rating])
            .unwrap();
    }
    server
}

fn assert_same_results(seq: &[Document], par: &[Document]) {
    assert_eq!(seq.len(), par.len());
    for (s, p) in seq.iter().zip(par) {
        assert_eq!(s.id, p.id);
        assert_eq!(s.rating, p.rating);
        assert!((s.relevance - p.relevance).abs() < 1e-6);
    }
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Same query produces identical results
#[test]
fn test_find_deterministic() {
    let docs: Vec<(Vec<usize>, i32)> = (0..40)
        .map(|i| (vec![i % 12, (i * 7) % 12, (i * 5) % 12], (i as i32 % 9) - 3))
        .collect();
    let server = build_server(&docs);

    let first = server.find_top_documents("cat dog -rat big").unwrap();
    for _ in 0..10 {
        assert_eq!(server.find_top_documents("cat dog -rat big").unwrap(), first);
    }
}

/// Sequential and parallel ranking agree on a fixed corpus
#[test]
fn test_sequential_parallel_agree() {
    let docs: Vec<(Vec<usize>, i32)> = (0..60)
        .map(|i| (vec![i % 12, (i * 3) % 12, (i * 11) % 12, i % 4], i as i32 % 7))
        .collect();
    let server = build_server(&docs);

    for query in ["cat", "cat dog city", "fluffy tail -collar", "small -big house", "rat pet"] {
        let seq = server
            .find_top_documents_with(ExecutionPolicy::Sequential, query, DocumentStatus::Active)
            .unwrap();
        let par = server
            .find_top_documents_with(ExecutionPolicy::Parallel, query, DocumentStatus::Active)
            .unwrap();
        assert_same_results(&seq, &par);
    }
}

/// Batch processing matches one-by-one execution
#[test]
fn test_batch_matches_individual() {
    let docs: Vec<(Vec<usize>, i32)> = (0..30)
        .map(|i| (vec![i % 12, (i + 1) % 12], i as i32))
        .collect();
    let server = build_server(&docs);
    let queries: Vec<String> = VOCABULARY.iter().map(|w| format!("{} -hall", w)).collect();

    let batch = process_queries(&server, &queries).unwrap();
    for (query, result) in queries.iter().zip(&batch) {
        assert_eq!(result, &server.find_top_documents(query).unwrap());
    }
}

/// Sequential and parallel removal leave the same index
#[test]
fn test_removal_policies_agree() {
    let docs: Vec<(Vec<usize>, i32)> = (0..25)
        .map(|i| (vec![i % 12, (i * 5) % 12, (i * 7) % 12], 1))
        .collect();
    let mut seq = build_server(&docs);
    let mut par = build_server(&docs);

    for id in (0..25).step_by(3) {
        seq.remove_document_with(ExecutionPolicy::Sequential, id);
        par.remove_document_with(ExecutionPolicy::Parallel, id);
    }

    assert_eq!(
        seq.document_ids().collect::<Vec<_>>(),
        par.document_ids().collect::<Vec<_>>()
    );
    assert_eq!(seq.index().terms(), par.index().terms());
    for id in &seq {
        assert_eq!(seq.word_frequencies(id), par.word_frequencies(id));
    }
    for term in seq.index().terms() {
        assert_eq!(seq.index().lookup(&term), par.index().lookup(&term));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn corpus() -> impl Strategy<Value = Vec<(Vec<usize>, i32)>> {
    prop::collection::vec(
        (prop::collection::vec(0usize..VOCABULARY.len(), 0..8), -10i32..10),
        1..40,
    )
}

fn query_text() -> impl Strategy<Value = String> {
    prop::collection::vec((0usize..VOCABULARY.len(), any::<bool>()), 0..6).prop_map(|words| {
        words
            .into_iter()
            .map(|(w, minus)| {
                if minus {
                    format!("-{}", VOCABULARY[w])
                } else {
                    VOCABULARY[w].to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parallel ranking returns the same documents in the same order
    #[test]
    fn prop_ranking_policy_equivalence(docs in corpus(), query in query_text()) {
        let server = build_server(&docs);
        let seq = server
            .find_top_documents_with(ExecutionPolicy::Sequential, &query, DocumentStatus::Active)
            .unwrap();
        let par = server
            .find_top_documents_with(ExecutionPolicy::Parallel, &query, DocumentStatus::Active)
            .unwrap();

        prop_assert_eq!(seq.len(), par.len());
        for (s, p) in seq.iter().zip(&par) {
            prop_assert_eq!(s.id, p.id);
            prop_assert!((s.relevance - p.relevance).abs() < 1e-6);
        }
    }

    /// Parallel matching returns the same terms
    #[test]
    fn prop_matching_policy_equivalence(docs in corpus(), query in query_text()) {
        let server = build_server(&docs);
        for id in &server {
            let seq = server
                .match_document_with(ExecutionPolicy::Sequential, &query, id)
                .unwrap();
            let par = server
                .match_document_with(ExecutionPolicy::Parallel, &query, id)
                .unwrap();
            prop_assert_eq!(seq, par);
        }
    }

    /// No result ever carries a minus word
    #[test]
    fn prop_minus_words_excluded(docs in corpus(), query in query_text()) {
        let server = build_server(&docs);
        let minus: Vec<&str> = query
            .split(' ')
            .filter_map(|w| w.strip_prefix('-'))
            .collect();
        for doc in server.find_top_documents(&query).unwrap() {
            let freqs = server.word_frequencies(doc.id);
            prop_assert!(minus.iter().all(|w| !freqs.contains_key(*w)));
        }
    }
}
