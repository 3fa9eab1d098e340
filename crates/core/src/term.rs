//! Interned term handle
//!
//! A `Term` is a cheap-to-clone, reference-counted string. The index allocates
//! each distinct word once at ingestion and hands out clones of that handle to
//! the forward map, the inverted map and matcher output, so term text is never
//! copied after the document is added. The allocation is released when the
//! last handle goes away, i.e. when the last posting for the word is removed.
//!
//! `Term` borrows as `str` with identical `Hash`/`Eq`/`Ord`, so maps keyed by
//! `Term` can be queried with plain `&str` slices of the query text.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Interned, immutable word
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term(Arc<str>);

impl Term {
    /// Allocate a new term from its text
    pub fn new(text: &str) -> Self {
        Term(Arc::from(text))
    }

    /// View the term text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of live handles sharing this allocation
    pub fn handle_count(this: &Term) -> usize {
        Arc::strong_count(&this.0)
    }
}

impl Deref for Term {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Term {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Term {
    fn from(text: &str) -> Self {
        Term::new(text)
    }
}

impl PartialEq<str> for Term {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
