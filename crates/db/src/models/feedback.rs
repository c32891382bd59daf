//! Feedback entity model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use storefront_core::feedback::FeedbackEntry;
use storefront_core::types::{DbId, Timestamp};

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub name: String,
    pub gender: String,
    pub email: String,
    pub feedback: String,
    pub submitted_on: NaiveDate,
    pub created_at: Timestamp,
}

impl From<Feedback> for FeedbackEntry {
    fn from(row: Feedback) -> Self {
        Self {
            name: row.name,
            gender: row.gender,
            email: row.email,
            feedback: row.feedback,
            date: row.submitted_on,
        }
    }
}
