//! Explicit landing-view state threaded through the render pipeline.
//!
//! Every transition is guarded: the page never leaves `1..=total_pages`
//! (or stays at 1 when there are no pages) and the featured index never
//! leaves the featured subset.

use crate::catalog::CatalogStore;
use crate::filter::{filter, normalize_query};
use crate::pagination::total_pages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    page: usize,
    featured_index: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            featured_index: 0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized (trimmed, lower-cased) search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn featured_index(&self) -> usize {
        self.featured_index
    }

    /// Replace the search query. Always returns to page 1.
    pub fn set_query(&mut self, raw: &str) {
        self.query = normalize_query(raw);
        self.page = 1;
    }

    /// Number of pages the current query produces over `store`.
    pub fn total_pages(&self, store: &CatalogStore, page_size: usize) -> usize {
        total_pages(filter(store.records(), &self.query).len(), page_size)
    }

    /// Jump to `page` if it exists. Returns whether the page changed.
    pub fn go_to_page(&mut self, page: i64, total_pages: usize) -> bool {
        match usize::try_from(page) {
            Ok(p) if p >= 1 && p <= total_pages && p != self.page => {
                self.page = p;
                true
            }
            _ => false,
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Select a featured game by dot index if it exists in the subset.
    pub fn select_featured(&mut self, index: usize, featured_len: usize) -> bool {
        if index < featured_len {
            self.featured_index = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::game;
    use crate::game::GameRecord;

    fn store(n: i64) -> CatalogStore {
        let records: Vec<GameRecord> = (1..=n).map(|id| game(id, &format!("Game {id}"))).collect();
        CatalogStore::from_records(records).unwrap()
    }

    #[test]
    fn starts_on_page_one_with_empty_query() {
        let state = ViewState::new();
        assert_eq!(state.page(), 1);
        assert_eq!(state.query(), "");
        assert_eq!(state.featured_index(), 0);
    }

    #[test]
    fn query_change_resets_page() {
        let mut state = ViewState::new();
        assert!(state.go_to_page(3, 4));
        state.set_query("  Game ");
        assert_eq!(state.page(), 1);
        assert_eq!(state.query(), "game");
    }

    #[test]
    fn page_stays_within_bounds() {
        let mut state = ViewState::new();
        assert!(!state.go_to_page(0, 2));
        assert!(!state.go_to_page(3, 2));
        assert!(!state.go_to_page(-1, 2));
        assert_eq!(state.page(), 1);

        assert!(!state.prev_page());
        assert!(state.next_page(2));
        assert!(!state.next_page(2));
        assert_eq!(state.page(), 2);
        assert!(state.prev_page());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn no_pages_means_no_navigation() {
        let mut state = ViewState::new();
        assert!(!state.next_page(0));
        assert!(!state.go_to_page(1, 0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn total_pages_tracks_query() {
        let catalog = store(13);
        let mut state = ViewState::new();
        assert_eq!(state.total_pages(&catalog, 12), 2);
        state.set_query("game 13");
        assert_eq!(state.total_pages(&catalog, 12), 1);
        state.set_query("nothing like this");
        assert_eq!(state.total_pages(&catalog, 12), 0);
    }

    #[test]
    fn featured_selection_is_guarded() {
        let mut state = ViewState::new();
        assert!(state.select_featured(2, 3));
        assert!(!state.select_featured(3, 3));
        assert_eq!(state.featured_index(), 2);
    }
}
