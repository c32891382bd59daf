pub mod catalog;
pub mod feedback;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog                 landing view (?q=&page=&featured=)
/// /details                 detail view (?id=), redirects home when unresolvable
/// /page-context            page bootstrap addresses (?path=)
///
/// /feedback                list (GET), submit (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .nest("/feedback", feedback::router())
}
