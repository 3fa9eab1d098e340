//! Lexis - embeddable in-process full-text search
//!
//! Lexis indexes short text documents and answers free-text queries with
//! TF-IDF ranking. Queries support minus words, status and predicate
//! filters, and sequential or parallel execution.
//!
//! # Quick Start
//!
//! ```
//! use lexis::{DocumentStatus, SearchServer};
//!
//! let mut server = SearchServer::from_stop_words_text("in the")?;
//! server.add_document(1, "cat in our small city", DocumentStatus::Active, &[1, 2, 3])?;
//! server.add_document(2, "dog in the hall", DocumentStatus::Active, &[4])?;
//!
//! let found = server.find_top_documents("small cat -hall")?;
//! assert_eq!(found[0].id, 1);
//! # Ok::<(), lexis::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `lexis-core`: documents, errors, configuration, fixed limits
//! - `lexis-concurrency`: bucketed concurrent map used by parallel ranking
//! - `lexis-search`: tokenizer, index, ranker, matcher and the server

pub use lexis_concurrency::ConcurrentMap;
pub use lexis_core::*;
pub use lexis_search::*;
