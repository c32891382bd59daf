//! Case-insensitive substring search over the catalog.
//!
//! A game matches when the folded query occurs in its name, in any of its
//! tags, or in its description. There is no tokenization and no ranking:
//! results keep catalog order.

use crate::game::GameRecord;

/// Trim and case-fold a raw search box value.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `game` matches an already-normalized, non-empty query.
pub fn matches(game: &GameRecord, needle: &str) -> bool {
    game.name.to_lowercase().contains(needle)
        || game.tags.iter().any(|t| t.to_lowercase().contains(needle))
        || game.description.to_lowercase().contains(needle)
}

/// Derive the subset of `records` matching `query`.
///
/// An empty query (after trimming) returns every record in catalog order.
pub fn filter<'a>(records: &'a [GameRecord], query: &str) -> Vec<&'a GameRecord> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|g| matches(g, &needle)).collect()
}
