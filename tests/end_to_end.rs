//! End-to-end tests through the `lexis` facade
//!
//! Exercises the full flow: configuration file, server construction,
//! indexing, request history, pagination and duplicate removal.

use lexis::{
    paginate, remove_duplicates, DocumentStatus, ExecutionPolicy, RequestQueue, SearchConfig,
    SearchServer,
};
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn server_from_file(dir: &TempDir, contents: &str) -> (SearchServer, SearchConfig) {
    let path = dir.path().join("lexis.toml");
    fs::write(&path, contents).unwrap();
    let config = SearchConfig::from_file(&path).unwrap();
    (SearchServer::with_config(&config).unwrap(), config)
}

// ============================================================================
// Flow Tests
// ============================================================================

#[test]
fn test_config_driven_server() {
    let dir = TempDir::new().unwrap();
    let (mut server, config) = server_from_file(
        &dir,
        "stop_words = [\"and\", \"with\"]\nscore_buckets = 8\nrequest_window = 3\n",
    );

    server
        .add_document(1, "funny pet and nasty rat", DocumentStatus::Active, &[7, 2, 7])
        .unwrap();
    server
        .add_document(2, "funny pet with curly hair", DocumentStatus::Active, &[1, 2])
        .unwrap();
    server
        .add_document(3, "big dog with curly hair", DocumentStatus::Active, &[1, 2, 8])
        .unwrap();

    let found = server
        .find_top_documents_with(ExecutionPolicy::Parallel, "curly -dog", DocumentStatus::Active)
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 2);

    let mut queue = RequestQueue::with_config(&server, &config).unwrap();
    for query in ["nothing", "nothing", "curly", "rat"] {
        queue.add_find_request(query).unwrap();
    }
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.no_result_requests(), 1);
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lexis.toml");
    fs::write(&path, "score_buckets = 0\n").unwrap();
    assert!(SearchConfig::from_file(&path).is_err());
}

#[test]
fn test_dedup_then_paginate() {
    let mut server = SearchServer::new(["and"]).unwrap();
    let texts = [
        "white cat",
        "cat white",
        "cat and white",
        "black cat",
        "grey cat",
        "ginger cat",
        "cat",
    ];
    for (id, text) in texts.iter().enumerate() {
        server
            .add_document(id as i32, text, DocumentStatus::Active, &[id as i32])
            .unwrap();
    }

    assert_eq!(remove_duplicates(&mut server), vec![1, 2]);
    assert_eq!(server.document_count(), 5);

    let found = server.find_top_documents("cat").unwrap();
    let pages = paginate(&found, 2);
    assert_eq!(pages.len(), 3);
    let page_sizes: Vec<usize> = pages.iter().map(|page| page.len()).collect();
    assert_eq!(page_sizes, vec![2, 2, 1]);
}
