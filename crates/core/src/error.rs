use crate::types::GameId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: GameId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure to obtain a usable catalog snapshot.
///
/// Every variant is terminal for the request that hit it: callers either
/// answer with a structured error or send the client back to the landing
/// page. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be reached (missing file, network failure,
    /// non-2xx response).
    #[error("Catalog source unreachable: {0}")]
    Unreachable(String),

    /// The source answered but the document is not a JSON array of games.
    #[error("Catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two records share the same `id`.
    #[error("Duplicate game id {0} in catalog")]
    DuplicateId(GameId),

    /// A record carries a negative or non-finite price.
    #[error("Game {id} has an invalid price {price}")]
    InvalidPrice { id: GameId, price: f64 },
}
