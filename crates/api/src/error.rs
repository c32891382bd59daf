use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use storefront_core::error::{CoreError, LoadError};
use storefront_core::feedback::StorageError;

use crate::response::GatewayResponse;

/// Application-level error type for catalog handlers.
///
/// Wraps [`CoreError`] and [`LoadError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent `{error, code}` JSON.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `storefront_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] LoadError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Catalog(err) => {
                tracing::warn!(error = %err, "Catalog unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CATALOG_UNAVAILABLE",
                    "The game catalog is currently unavailable".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, Json(body)).into_response()
    }
}

/// Errors from the feedback gateway.
///
/// Rendered as `{success: false, message}` so clients of the legacy
/// support form keep working.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A required field is missing or a value is malformed. No write happened.
    #[error("{0}")]
    Validation(String),

    /// The request body could not be decoded.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The store refused or failed the write.
    #[error("Error submitting feedback: {0}")]
    SubmitFailed(StorageError),

    /// The store failed to list entries.
    #[error("Error loading feedback: {0}")]
    ListFailed(StorageError),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl From<CoreError> for GatewayError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => GatewayError::Validation(msg),
            other => GatewayError::SubmitFailed(StorageError::Query(other.to_string())),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Validation(_) | GatewayError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            GatewayError::SubmitFailed(err) | GatewayError::ListFailed(err) => {
                tracing::error!(error = %err, "Feedback storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        (status, Json(GatewayResponse::failure(self.to_string()))).into_response()
    }
}
