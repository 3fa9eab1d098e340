//! Fixed ranking constants and configuration defaults
//!
//! The ranking constants are part of the result contract: changing them
//! changes which documents callers see.

/// Maximum number of documents returned by a ranking call
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevance values closer than this are considered equal and ordered by rating
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Bucket count of the per-query concurrent score map
pub const DEFAULT_SCORE_BUCKETS: usize = 100;

/// Number of recent requests tracked by the request queue
pub const DEFAULT_REQUEST_WINDOW: usize = 1440;
