//! Page slicing for result lists

use std::fmt;

/// A borrowed page of items
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    items: &'a [T],
}

impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

impl<'a, T> Page<'a, T> {
    /// Items on this page
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for Page<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Items are written back to back with no separator
impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Sequence of pages over a slice
#[derive(Debug)]
pub struct Paginator<'a, T> {
    pages: Vec<Page<'a, T>>,
}

impl<'a, T> Paginator<'a, T> {
    /// Slice `items` into pages of `page_size`
    ///
    /// The last page may be shorter. A `page_size` of zero puts everything on
    /// one page; empty input has no pages.
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        let pages = if items.is_empty() {
            Vec::new()
        } else if page_size == 0 {
            vec![Page { items }]
        } else {
            items.chunks(page_size).map(|items| Page { items }).collect()
        };
        Paginator { pages }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if there are no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page by index
    pub fn page(&self, index: usize) -> Option<Page<'a, T>> {
        self.pages.get(index).copied()
    }

    /// Iterate over pages
    pub fn iter(&self) -> impl Iterator<Item = Page<'a, T>> + '_ {
        self.pages.iter().copied()
    }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = std::vec::IntoIter<Page<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

/// Slice `items` into pages of `page_size`
///
/// # Example
///
/// ```
/// use lexis_search::paginate;
///
/// let pages = paginate(&[1, 2, 3, 4, 5], 2);
/// assert_eq!(pages.len(), 3);
/// assert_eq!(pages.page(2).unwrap().to_string(), "5");
/// ```
pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}
