//! Repository for the `feedback` table.

use sqlx::PgPool;
use storefront_core::feedback::NewFeedback;

use crate::models::feedback::Feedback;

/// Column list for `feedback` queries.
const COLUMNS: &str = "id, name, gender, email, feedback, submitted_on, created_at";

/// Provides insert and listing for feedback entries.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a validated entry, returning the full row.
    pub async fn create(pool: &PgPool, input: &NewFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (name, gender, email, feedback, submitted_on) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(&input.name)
            .bind(&input.gender)
            .bind(&input.email)
            .bind(&input.feedback)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// List every entry, newest date first. Entries sharing a date come back
    /// latest insert first.
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<Feedback>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM feedback ORDER BY submitted_on DESC, id DESC");
        sqlx::query_as::<_, Feedback>(&query).fetch_all(pool).await
    }
}
