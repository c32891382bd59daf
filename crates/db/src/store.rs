//! [`FeedbackStore`] implementations.
//!
//! [`PgFeedbackStore`] is the production store. [`MemoryFeedbackStore`]
//! backs the gateway when no `DATABASE_URL` is configured (local runs,
//! tests); its contents live only as long as the process.

use async_trait::async_trait;
use storefront_core::feedback::{FeedbackEntry, FeedbackStore, NewFeedback, StorageError};
use tokio::sync::RwLock;

use crate::repositories::FeedbackRepo;
use crate::DbPool;

/// Map a sqlx error onto the storage failure kinds surfaced to clients.
pub fn classify_sqlx_error(err: &sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::Database(db_err) => StorageError::Rejected(db_err.message().to_string()),
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(err.to_string()),
        other => StorageError::Query(other.to_string()),
    }
}

/// PostgreSQL-backed feedback store.
#[derive(Clone)]
pub struct PgFeedbackStore {
    pool: DbPool,
}

impl PgFeedbackStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackStore for PgFeedbackStore {
    async fn insert(&self, entry: &NewFeedback) -> Result<(), StorageError> {
        let row = FeedbackRepo::create(&self.pool, entry).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to insert feedback");
            classify_sqlx_error(&e)
        })?;
        tracing::debug!(feedback_id = row.id, "Feedback row inserted");
        Ok(())
    }

    async fn list_recent(&self) -> Result<Vec<FeedbackEntry>, StorageError> {
        let rows = FeedbackRepo::list_recent(&self.pool).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list feedback");
            classify_sqlx_error(&e)
        })?;
        Ok(rows.into_iter().map(FeedbackEntry::from).collect())
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| classify_sqlx_error(&e))
    }
}

/// Process-local feedback store.
#[derive(Default)]
pub struct MemoryFeedbackStore {
    entries: RwLock<Vec<FeedbackEntry>>,
}

impl MemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    async fn insert(&self, entry: &NewFeedback) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .push(FeedbackEntry::from(entry.clone()));
        Ok(())
    }

    async fn list_recent(&self) -> Result<Vec<FeedbackEntry>, StorageError> {
        // Latest insert first, then a stable sort keeps that order on ties.
        let mut entries: Vec<FeedbackEntry> =
            self.entries.read().await.iter().rev().cloned().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn entry(name: &str, date: (i32, u32, u32)) -> NewFeedback {
        NewFeedback {
            name: name.to_string(),
            gender: "Other".to_string(),
            email: format!("{name}@example.com"),
            feedback: "ok".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[tokio::test]
    async fn memory_store_lists_newest_date_first() {
        let store = MemoryFeedbackStore::new();
        store.insert(&entry("old", (2023, 1, 1))).await.unwrap();
        store.insert(&entry("new", (2024, 6, 1))).await.unwrap();
        store.insert(&entry("mid", (2023, 7, 1))).await.unwrap();

        let names: Vec<String> = store
            .list_recent()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn memory_store_breaks_ties_by_latest_insert() {
        let store = MemoryFeedbackStore::new();
        store.insert(&entry("first", (2024, 1, 1))).await.unwrap();
        store.insert(&entry("second", (2024, 1, 1))).await.unwrap();

        let listed = store.list_recent().await.unwrap();
        assert_eq!(listed[0].name, "second");
        assert_eq!(listed[1].name, "first");
        assert_eq!(store.len().await, 2);
    }

    #[test]
    fn pool_errors_are_unavailable() {
        assert!(matches!(
            classify_sqlx_error(&sqlx::Error::PoolTimedOut),
            StorageError::Unavailable(_)
        ));
        assert!(matches!(
            classify_sqlx_error(&sqlx::Error::RowNotFound),
            StorageError::Query(_)
        ));
    }
}
