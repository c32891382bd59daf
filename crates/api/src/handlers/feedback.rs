//! Handlers for the feedback gateway.
//!
//! `POST` accepts JSON, the legacy urlencoded support form, or multipart
//! form data; `GET` lists every entry newest first. Every outcome, including
//! failures, is a `{success, ...}` JSON body.

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};

use storefront_core::feedback::{FeedbackSubmission, SUBMITTED_MESSAGE};

use crate::error::GatewayError;
use crate::response::GatewayResponse;
use crate::state::AppState;

/// Submission body, decoded by content type.
///
/// Urlencoded and multipart bodies are read as form fields. Anything else is
/// read as JSON, except that an empty body yields an empty submission so it
/// fails the required-field check instead of the decoder.
pub struct FeedbackPayload(pub FeedbackSubmission);

impl<S: Send + Sync> FromRequest<S> for FeedbackPayload {
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let submission = if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(submission) = Form::<FeedbackSubmission>::from_request(req, state)
                .await
                .map_err(|e| GatewayError::MalformedBody(e.body_text()))?;
            submission
        } else if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| GatewayError::MalformedBody(e.body_text()))?;
            read_multipart(multipart).await?
        } else {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| GatewayError::MalformedBody(e.body_text()))?;
            if body.iter().all(u8::is_ascii_whitespace) {
                FeedbackSubmission::default()
            } else {
                serde_json::from_slice(&body)
                    .map_err(|e| GatewayError::MalformedBody(e.to_string()))?
            }
        };

        Ok(FeedbackPayload(submission))
    }
}

/// Collect the text parts of a multipart form. File parts and unknown keys
/// are skipped.
async fn read_multipart(mut multipart: Multipart) -> Result<FeedbackSubmission, GatewayError> {
    let mut submission = FeedbackSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::MalformedBody(e.body_text()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(key) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| GatewayError::MalformedBody(e.body_text()))?;
        if !submission.set_field(&key, value) {
            tracing::debug!(field = %key, "Ignoring unknown feedback form field");
        }
    }

    Ok(submission)
}

// ---------------------------------------------------------------------------
// POST /feedback
// ---------------------------------------------------------------------------

/// Validate and store one submission. Nothing is written unless every
/// required field is present.
pub async fn submit_feedback(
    State(state): State<AppState>,
    FeedbackPayload(submission): FeedbackPayload,
) -> Result<impl IntoResponse, GatewayError> {
    let today = chrono::Local::now().date_naive();
    let entry = submission.into_new(today)?;

    state
        .feedback
        .insert(&entry)
        .await
        .map_err(GatewayError::SubmitFailed)?;

    tracing::info!(date = %entry.date, "Feedback submitted");

    Ok((
        StatusCode::CREATED,
        Json(GatewayResponse::ok(SUBMITTED_MESSAGE)),
    ))
}

// ---------------------------------------------------------------------------
// GET /feedback
// ---------------------------------------------------------------------------

/// List all feedback, newest date first.
pub async fn list_feedback(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let entries = state
        .feedback
        .list_recent()
        .await
        .map_err(GatewayError::ListFailed)?;

    Ok(Json(GatewayResponse::with_data(entries)))
}

/// Any method other than `GET`/`POST`.
pub async fn method_not_allowed() -> GatewayError {
    GatewayError::MethodNotAllowed
}
