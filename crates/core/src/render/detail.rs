//! Single-game detail view.

use serde::Serialize;

use super::media::{full_gallery, MediaView};
use super::PriceLabel;
use crate::game::GameRecord;
use crate::types::GameId;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub id: GameId,
    pub page_title: String,
    pub name: String,
    pub hero_image: String,
    pub description: String,
    pub price: PriceLabel,
    pub publisher: String,
    pub release_date: String,
    pub platforms: Vec<String>,
    pub tags: Vec<String>,
    /// `None` hides the gallery section entirely (game has no media).
    pub gallery: Option<Vec<MediaView>>,
}

/// Render every attribute of `game`, including its full gallery.
pub fn render_detail(game: &GameRecord, site_name: &str) -> DetailView {
    let gallery = if game.media.is_empty() {
        None
    } else {
        Some(full_gallery(&game.media, &game.name))
    };

    DetailView {
        id: game.id,
        page_title: format!("{} - {site_name}", game.name),
        name: game.name.clone(),
        hero_image: game.image.clone(),
        description: game.description.clone(),
        price: PriceLabel::for_price(game.price),
        publisher: game.publisher.clone(),
        release_date: game.release_date.clone(),
        platforms: game.platform.clone(),
        tags: game.tags.clone(),
        gallery,
    }
}
