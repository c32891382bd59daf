//! Route definitions for the feedback gateway.
//!
//! Mounted at `/feedback` by `api_routes()` and at `/support` for the
//! legacy support form.

use axum::routing::post;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Feedback routes.
///
/// ```text
/// POST   /     -> submit_feedback
/// GET    /     -> list_feedback
/// *      /     -> method_not_allowed
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(feedback::submit_feedback)
            .get(feedback::list_feedback)
            .fallback(feedback::method_not_allowed),
    )
}
