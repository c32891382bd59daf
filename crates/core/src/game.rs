//! Game records as they appear in the catalog document.
//!
//! The catalog is a JSON array of [`GameRecord`] objects with camelCase keys
//! (`releaseDate`, `featuredImage`). Records are loaded once per view and
//! never mutated.

use serde::{Deserialize, Serialize};

use crate::types::GameId;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub release_date: String,
    /// `0.0` means the game is free.
    pub price: f64,
    pub image: String,
    /// High-resolution banner used by the carousel. Falls back to `image`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub platform: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

impl GameRecord {
    /// Banner image for promotional views.
    pub fn banner_image(&self) -> &str {
        self.featured_image
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.image)
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

/// Kind of a gallery entry.
///
/// Anything other than `image` or `youtube` deserializes as
/// [`MediaKind::Unknown`] and is dropped by every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Youtube,
    #[serde(other)]
    Unknown,
}

/// One screenshot or video in a game's gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Image URL, or a YouTube URL / bare 11-character video id.
    pub url: String,
}
