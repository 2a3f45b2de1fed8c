//! Zero-based pagination over in-memory slices.
//!
//! Mirrors the paging contract of the dashboard's backend API: each
//! response page reports its own coordinates plus the total element
//! and page counts, and an out-of-range page is an empty page with the
//! totals intact, never an error.

use serde::{Deserialize, Serialize};

/// Hard cap on page size; larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: usize = 200;

/// Default page size when a caller passes zero.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A page request: zero-based page index and requested size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: usize,
    /// Elements per page, already clamped to `[1, MAX_PAGE_SIZE]`.
    pub size: usize,
}

impl PageRequest {
    /// Builds a request, clamping the size into its valid range.
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        let size = if size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            size.min(MAX_PAGE_SIZE)
        };
        Self { page, size }
    }

    /// Offset of the first element of this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results with the totals the table footer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Elements of this page, in source order.
    pub content: Vec<T>,
    /// Zero-based page index.
    pub page: usize,
    /// Requested page size (the last page may hold fewer).
    pub size: usize,
    /// Total elements across all pages.
    pub total_elements: usize,
    /// Total page count for this size.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Whether this page carries no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Slices one page out of `items` per the request.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], request: &PageRequest) -> Page<T> {
    // Fields are public; tolerate a hand-built request with size 0.
    let size = request.size.max(1);
    let total_elements = items.len();
    let total_pages = total_elements.div_ceil(size);
    let start = request.page.saturating_mul(size).min(total_elements);
    let end = start.saturating_add(size).min(total_elements);
    Page {
        content: items[start..end].to_vec(),
        page: request.page,
        size,
        total_elements,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, paginate};

    #[test]
    fn slices_interior_and_final_pages() {
        let items: Vec<u32> = (0..25).collect();
        let first = paginate(&items, &PageRequest::new(0, 10));
        assert_eq!(first.content, (0..10).collect::<Vec<_>>());
        assert_eq!(first.total_elements, 25);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, &PageRequest::new(2, 10));
        assert_eq!(last.content, vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn out_of_range_page_is_empty_with_totals_intact() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(&items, &PageRequest::new(9, 10));
        assert!(page.is_empty());
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn empty_source_yields_zero_pages() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, &PageRequest::default());
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn size_is_clamped_into_range() {
        assert_eq!(PageRequest::new(0, 0).size, DEFAULT_PAGE_SIZE);
        assert_eq!(PageRequest::new(0, 10_000).size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(3, 50).offset(), 150);
    }
}
