/// Catalog identifiers are plain integers carried in page addresses.
pub type GameId = i64;

/// Feedback primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
