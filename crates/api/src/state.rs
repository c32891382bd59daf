use std::sync::Arc;

use storefront_core::feedback::FeedbackStore;

use crate::catalog_source::CatalogSource;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Catalog location, re-read on every view request.
    pub catalog: Arc<CatalogSource>,
    /// Feedback persistence.
    pub feedback: Arc<dyn FeedbackStore>,
}
