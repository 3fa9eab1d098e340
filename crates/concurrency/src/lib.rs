//! Concurrency primitives for Lexis
//!
//! This crate provides:
//! - ConcurrentMap: fixed-bucket, mutex-sharded map keyed by integers
//! - BucketKey: integer keys that map onto a bucket by modulo
//!
//! Parallel ranking accumulates per-document scores in a `ConcurrentMap`
//! so that worker threads only contend when two documents share a bucket.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod concurrent_map;

pub use concurrent_map::{Access, BucketKey, ConcurrentMap};
