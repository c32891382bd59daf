//! Feedback submissions and the storage seam behind the feedback gateway.
//!
//! Submissions arrive either as JSON (`name`, `gender`, ...) or as the
//! legacy support form (`SName`, `SGender`, ...). All four text fields are
//! required; the date is optional and defaults to the server's current date.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Message returned whenever a required field is missing or empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// Message returned after a successful write.
pub const SUBMITTED_MESSAGE: &str = "Feedback submitted successfully";

/// Wire format for feedback dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, unvalidated submission. Every field is optional on the wire so a
/// missing field surfaces as a validation failure rather than a parse error.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct FeedbackSubmission {
    #[serde(default, alias = "SName")]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[serde(default, alias = "SGender")]
    #[validate(required, length(min = 1))]
    pub gender: Option<String>,

    #[serde(default, alias = "SEmail")]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[serde(default, alias = "SFeedback")]
    #[validate(required, length(min = 1))]
    pub feedback: Option<String>,

    #[serde(default, alias = "SDate")]
    pub date: Option<String>,
}

/// A validated submission ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub name: String,
    pub gender: String,
    pub email: String,
    pub feedback: String,
    pub date: NaiveDate,
}

/// A stored feedback entry as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub name: String,
    pub gender: String,
    pub email: String,
    pub feedback: String,
    pub date: NaiveDate,
}

impl From<NewFeedback> for FeedbackEntry {
    fn from(new: NewFeedback) -> Self {
        Self {
            name: new.name,
            gender: new.gender,
            email: new.email,
            feedback: new.feedback,
            date: new.date,
        }
    }
}

impl FeedbackSubmission {
    /// Set one field by its wire key (`name` or legacy `SName`, and so on).
    /// Returns `false` for keys the form does not carry.
    pub fn set_field(&mut self, key: &str, value: String) -> bool {
        let slot = match key {
            "name" | "SName" => &mut self.name,
            "gender" | "SGender" => &mut self.gender,
            "email" | "SEmail" => &mut self.email,
            "feedback" | "SFeedback" => &mut self.feedback,
            "date" | "SDate" => &mut self.date,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Validate the submission, filling in `today` when no date was given.
    pub fn into_new(self, today: NaiveDate) -> Result<NewFeedback, CoreError> {
        self.validate()
            .map_err(|_| CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;

        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
                CoreError::Validation(format!("Invalid date '{raw}', expected YYYY-MM-DD"))
            })?,
        };

        Ok(NewFeedback {
            name: self.name.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            feedback: self.feedback.unwrap_or_default(),
            date,
        })
    }
}

/// Why a feedback store call failed. The message is echoed back to the
/// submitter, so implementations should keep it free of credentials.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing store could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The store refused the write (constraint violation, bad value).
    #[error("write rejected: {0}")]
    Rejected(String),

    /// Any other failure while running a statement.
    #[error("query failed: {0}")]
    Query(String),
}

/// Persistence behind the feedback gateway.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Store one validated entry.
    async fn insert(&self, entry: &NewFeedback) -> Result<(), StorageError>;

    /// Every entry, newest date first (latest insert first on equal dates).
    async fn list_recent(&self) -> Result<Vec<FeedbackEntry>, StorageError>;

    /// Cheap reachability probe for `/health`.
    async fn health_check(&self) -> Result<(), StorageError>;
}
