//! Landing view: filter → paginate → grid, plus the featured carousel.

use serde::Serialize;

use super::carousel::{Carousel, FeaturedView};
use super::grid::{render_grid, GridCell};
use crate::catalog::CatalogStore;
use crate::filter::filter;
use crate::pagination::{page_buttons, paginate, PageButton};
use crate::view_state::ViewState;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    pub query: String,
    pub featured: Option<FeaturedView>,
    pub grid: Vec<GridCell>,
    pub pagination: PaginationView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub buttons: Vec<PageButton>,
}

/// Derive the full landing view for `state` over `store`.
pub fn render_landing(store: &CatalogStore, state: &ViewState, page_size: usize) -> LandingView {
    let matching = filter(store.records(), state.query());
    let window = paginate(&matching, state.page() as i64, page_size);

    let carousel = Carousel::starting_at(store.featured(), state.featured_index());

    LandingView {
        query: state.query().to_string(),
        featured: carousel.render(),
        grid: render_grid(window.items),
        pagination: PaginationView {
            page: state.page(),
            total_pages: window.total_pages,
            has_prev: window.has_prev,
            has_next: window.has_next,
            buttons: page_buttons(window.total_pages, state.page()),
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::game::fixtures::game;
    use crate::game::GameRecord;

    fn catalog() -> CatalogStore {
        let mut records: Vec<GameRecord> =
            (1..=13).map(|id| game(id, &format!("Game {id}"))).collect();
        records[0].featured = true;
        records[4].featured = true;
        records[12].name = "Portal".into();
        CatalogStore::from_records(records).unwrap()
    }

    #[test]
    fn first_page_has_twelve_cards() {
        let store = catalog();
        let view = render_landing(&store, &ViewState::new(), 12);
        assert_eq!(view.grid.len(), 12);
        assert_eq!(view.pagination.total_pages, 2);
        assert!(view.pagination.has_next);
        assert!(!view.pagination.has_prev);
        assert!(view.pagination.buttons[0].active);
    }

    #[test]
    fn second_page_has_the_remainder() {
        let store = catalog();
        let mut state = ViewState::new();
        assert!(state.next_page(state.total_pages(&store, 12)));
        let view = render_landing(&store, &state, 12);
        assert_eq!(view.grid.len(), 1);
        assert_matches!(&view.grid[0], GridCell::Card(card) if card.display_name == "Portal");
        assert!(view.pagination.buttons[1].active);
    }

    #[test]
    fn search_narrows_grid() {
        let store = catalog();
        let mut state = ViewState::new();
        state.set_query("PORTAL");
        let view = render_landing(&store, &state, 12);
        assert_eq!(view.query, "portal");
        assert_eq!(view.grid.len(), 1);
        assert_eq!(view.pagination.total_pages, 1);
    }

    #[test]
    fn search_without_hits_shows_placeholder() {
        let store = catalog();
        let mut state = ViewState::new();
        state.set_query("zzz");
        let view = render_landing(&store, &state, 12);
        assert_matches!(view.grid.as_slice(), [GridCell::NoResults { .. }]);
        assert_eq!(view.pagination.total_pages, 0);
        assert!(view.pagination.buttons.is_empty());
        assert!(!view.pagination.has_next);
    }

    #[test]
    fn carousel_follows_featured_index() {
        let store = catalog();
        let mut state = ViewState::new();
        assert!(state.select_featured(1, store.featured().len()));
        let view = render_landing(&store, &state, 12);
        assert_eq!(view.featured.unwrap().banner.id, 5);
    }

    #[test]
    fn stale_featured_index_starts_on_first_game() {
        let store = catalog();
        let mut state = ViewState::new();
        // Valid for a larger featured subset than this catalog has.
        assert!(state.select_featured(3, 4));
        let view = render_landing(&store, &state, 12);
        let featured = view.featured.unwrap();
        assert_eq!(featured.banner.id, 1);
        assert!(featured.dots[0].active);
    }

    #[test]
    fn carousel_ignores_search() {
        let store = catalog();
        let mut state = ViewState::new();
        state.set_query("zzz");
        let view = render_landing(&store, &state, 12);
        assert!(view.featured.is_some());
    }
}
