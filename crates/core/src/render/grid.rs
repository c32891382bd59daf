//! Landing grid cards.

use serde::Serialize;

use super::plain_price;
use crate::addressing::details_href;
use crate::game::GameRecord;
use crate::types::GameId;

pub const NO_RESULTS_TITLE: &str = "No games found";
pub const NO_RESULTS_HINT: &str = "Try searching for something else";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: GameId,
    pub href: String,
    pub image_url: String,
    pub display_name: String,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GridCell {
    Card(CardView),
    NoResults { title: String, hint: String },
}

/// Project a page window into grid cells.
///
/// An empty window yields a single [`GridCell::NoResults`] cell.
pub fn render_grid(items: &[&GameRecord]) -> Vec<GridCell> {
    if items.is_empty() {
        return vec![GridCell::NoResults {
            title: NO_RESULTS_TITLE.to_string(),
            hint: NO_RESULTS_HINT.to_string(),
        }];
    }

    items
        .iter()
        .map(|game| {
            GridCell::Card(CardView {
                id: game.id,
                href: details_href(game.id),
                image_url: game.image.clone(),
                display_name: game.name.clone(),
                price_label: plain_price(game.price),
            })
        })
        .collect()
}
