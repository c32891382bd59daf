//! Handlers for the catalog views.

use axum::extract::{Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;

use storefront_core::addressing::{landing_url, parse_game_id};
use storefront_core::catalog::CatalogStore;
use storefront_core::error::CoreError;
use storefront_core::render::detail::{render_detail, DetailView};
use storefront_core::render::landing::{render_landing, LandingView};
use storefront_core::render::page::{page_context, PageContext};
use storefront_core::view_state::ViewState;

use crate::catalog_source::cache_buster;
use crate::error::{AppError, AppResult};
use crate::query::{CatalogParams, DetailParams, PageContextParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Header value for responses that must be re-fetched on every page load.
const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

// ---------------------------------------------------------------------------
// GET /games.json
// ---------------------------------------------------------------------------

/// Serve the catalog document verbatim, after checking it parses.
pub async fn raw_catalog(State(state): State<AppState>) -> AppResult<Response> {
    let bytes = state.catalog.fetch_raw().await?;
    CatalogStore::from_json(&bytes)?;

    Ok((
        [(CONTENT_TYPE, "application/json"), (CACHE_CONTROL, NO_CACHE)],
        bytes,
    )
        .into_response())
}

// ---------------------------------------------------------------------------
// GET /catalog
// ---------------------------------------------------------------------------

/// Landing view: featured carousel, filtered and paginated grid.
///
/// Out-of-range `page` or `featured` values are ignored and the defaults
/// (page 1, first featured game) are kept.
pub async fn landing(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<Json<DataResponse<LandingView>>> {
    let store = state.catalog.load().await?;
    let page_size = state.config.page_size;

    let mut view = ViewState::new();
    if let Some(q) = params.q.as_deref() {
        view.set_query(q);
    }
    if let Some(page) = params.page() {
        let total = view.total_pages(&store, page_size);
        if !view.go_to_page(page, total) {
            tracing::debug!(page, total, "Page request left view on page 1");
        }
    }
    if let Some(index) = params.featured() {
        view.select_featured(index, store.featured().len());
    }

    let landing = render_landing(&store, &view, page_size);
    Ok(Json(DataResponse { data: landing }))
}

// ---------------------------------------------------------------------------
// GET /details
// ---------------------------------------------------------------------------

/// Detail view for `?id=`. Anything that prevents rendering (missing or
/// unparseable id, unknown game, catalog failure) sends the client back to
/// the landing page instead of showing an error.
pub async fn details(
    State(state): State<AppState>,
    Query(params): Query<DetailParams>,
) -> Response {
    match resolve_detail(&state, &params).await {
        Ok(view) => Json(DataResponse { data: view }).into_response(),
        Err(err) => {
            tracing::info!(error = %err, "Detail view unresolvable, redirecting to landing");
            Redirect::to(&landing_url("/")).into_response()
        }
    }
}

async fn resolve_detail(state: &AppState, params: &DetailParams) -> AppResult<DetailView> {
    let id = params
        .id
        .as_deref()
        .and_then(parse_game_id)
        .ok_or_else(|| AppError::BadRequest("Missing or invalid game id".into()))?;

    let store = state.catalog.load().await?;
    let game = store.find(id).ok_or(AppError::Core(CoreError::NotFound {
        entity: "Game",
        id,
    }))?;

    Ok(render_detail(game, &state.config.site_name))
}

// ---------------------------------------------------------------------------
// GET /page-context
// ---------------------------------------------------------------------------

/// Addresses a page at `?path=` needs to reach the catalog, the landing
/// page and the shared layout fragment.
pub async fn page_context_for(
    Query(params): Query<PageContextParams>,
) -> Json<DataResponse<PageContext>> {
    let path = params.path.as_deref().unwrap_or("/");
    Json(DataResponse {
        data: page_context(path, cache_buster()),
    })
}
