//! In-memory catalog snapshot.
//!
//! A [`CatalogStore`] is built from the raw catalog document and then only
//! read. Loading validates the record invariants (unique ids, non-negative
//! prices) so the derivations downstream never have to.

use std::collections::HashSet;

use crate::error::LoadError;
use crate::game::GameRecord;
use crate::types::GameId;

/// Read-only snapshot of every game in the catalog, in document order.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<GameRecord>,
}

impl CatalogStore {
    /// Parse a catalog document (a JSON array of games).
    pub fn from_json(bytes: &[u8]) -> Result<Self, LoadError> {
        let records: Vec<GameRecord> = serde_json::from_slice(bytes)?;
        Self::from_records(records)
    }

    /// Build a store from already-parsed records, enforcing invariants.
    pub fn from_records(records: Vec<GameRecord>) -> Result<Self, LoadError> {
        let mut seen: HashSet<GameId> = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(LoadError::DuplicateId(record.id));
            }
            if !record.price.is_finite() || record.price < 0.0 {
                return Err(LoadError::InvalidPrice {
                    id: record.id,
                    price: record.price,
                });
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The promotional subset (`featured == true`), in catalog order.
    pub fn featured(&self) -> Vec<&GameRecord> {
        self.records.iter().filter(|g| g.featured).collect()
    }

    /// Look up a single game by id.
    pub fn find(&self, id: GameId) -> Option<&GameRecord> {
        self.records.iter().find(|g| g.id == id)
    }
}
