//! TF-IDF full-text search for Lexis
//!
//! This crate provides:
//! - Tokenizer and stop-word filtering
//! - Query parsing with plus and minus words
//! - InvertedIndex with a mirrored forward index
//! - TF-IDF ranking, sequential or parallel
//! - Per-document query matching
//! - SearchServer tying the above together
//! - Batch queries, request history, pagination and duplicate removal
//!
//! # Usage
//!
//! ```
//! use lexis_search::{ExecutionPolicy, SearchServer};
//! use lexis_core::DocumentStatus;
//!
//! let mut server = SearchServer::from_stop_words_text("and in the").unwrap();
//! server.add_document(1, "cat in our small city", DocumentStatus::Active, &[1, 2, 3]).unwrap();
//! server.add_document(2, "cat in the house hall", DocumentStatus::Active, &[1, 2, 3]).unwrap();
//!
//! let found = server
//!     .find_top_documents_with(ExecutionPolicy::Parallel, "cat -hall", DocumentStatus::Active)
//!     .unwrap();
//! assert_eq!(found[0].id, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod duplicates;
pub mod index;
pub mod matcher;
pub mod paginator;
pub mod query;
pub mod ranker;
pub mod request_queue;
pub mod server;
pub mod tokenizer;

// Re-export commonly used types
pub use batch::{process_queries, process_queries_joined};
pub use duplicates::remove_duplicates;
pub use index::{DocumentIds, DocumentRecord, InvertedIndex, PostingList, WordFrequencies};
pub use matcher::MatchedDocument;
pub use paginator::{paginate, Page, Paginator};
pub use query::{parse_query, ExecutionPolicy, Query};
pub use request_queue::RequestQueue;
pub use server::SearchServer;
pub use tokenizer::{is_valid_word, split_into_words, StopWords};
