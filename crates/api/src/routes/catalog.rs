//! Route definitions for the catalog views.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog view routes (mounted under `/api/v1`).
///
/// ```text
/// GET /catalog        -> landing
/// GET /details        -> details
/// GET /page-context   -> page_context_for
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog::landing))
        .route("/details", get(catalog::details))
        .route("/page-context", get(catalog::page_context_for))
}

/// Raw catalog document, mounted at the site root.
pub fn document_router() -> Router<AppState> {
    Router::new().route("/games.json", get(catalog::raw_catalog))
}
