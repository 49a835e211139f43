//! Page slicing for the browse listing.

use serde::Serialize;

/// One page of a larger result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// 1-based page number actually returned (after clamping)
    pub number: usize,
    /// Total number of pages; 0 when there are no items
    pub total_pages: usize,
    /// Total number of items across all pages
    pub total_items: usize,
    /// Items on this page
    pub items: Vec<T>,
}

/// Number of pages needed for `total_items` at `page_size` per page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Returns page `number` (1-based) of `items`.
///
/// Out-of-range page numbers are clamped to the first or last page. A zero
/// page size is treated as one item per page.
pub fn paginate<T: Clone>(items: &[T], number: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let number = number.clamp(1, total_pages.max(1));

    let start = (number - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    Page {
        number,
        total_pages,
        total_items,
        items,
    }
}
