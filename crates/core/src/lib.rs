//! Core types for Lexis
//!
//! This crate defines the foundational types shared by the engine crates:
//! - DocumentId, Rating, DocumentStatus: document identity and lifecycle tags
//! - Document: a ranked search result
//! - DocumentPredicate: filter over (id, status, rating) used by ranking
//! - Term: interned handle for an indexed word
//! - Error: Error type hierarchy
//! - SearchConfig: TOML-backed engine configuration
//! - Limits: fixed ranking constants

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod error;
pub mod limits;
pub mod term;

pub use config::SearchConfig;
pub use document::{
    compute_average_rating, Document, DocumentId, DocumentPredicate, DocumentStatus, Rating,
};
pub use error::{Error, Result};
pub use limits::{
    DEFAULT_REQUEST_WINDOW, DEFAULT_SCORE_BUCKETS, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON,
};
pub use term::Term;
