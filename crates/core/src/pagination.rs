//! Page windows over a record set.
//!
//! Pages are 1-indexed. The engine never clamps: an out-of-range page simply
//! yields an empty window, and keeping the page inside `1..=total_pages` is
//! the caller's job (see [`crate::view_state::ViewState`]).

use serde::Serialize;

/// Number of cards shown per page on the landing view.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One page of a record set plus the state of the prev/next controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Total number of pages for `len` records; 0 when there are none.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice `records` to the window for `page`.
///
/// `page` is signed so callers can pass raw user input; anything below 1 is
/// out of range and produces an empty window.
pub fn paginate<T>(records: &[T], page: i64, page_size: usize) -> Page<'_, T> {
    let total = total_pages(records.len(), page_size);

    let items = match usize::try_from(page) {
        Ok(p) if p >= 1 && page_size > 0 => {
            let start = (p - 1).saturating_mul(page_size);
            let end = start.saturating_add(page_size).min(records.len());
            records.get(start..end).unwrap_or(&[])
        }
        _ => &[],
    };

    Page {
        items,
        total_pages: total,
        has_prev: page > 1,
        has_next: page < total as i64,
    }
}

/// A numbered page button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// One button per page, with the current page marked active.
pub fn page_buttons(total_pages: usize, current: usize) -> Vec<PageButton> {
    (1..=total_pages)
        .map(|number| PageButton {
            number,
            active: number == current,
        })
        .collect()
}
