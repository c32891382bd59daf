//! Featured-game carousel.
//!
//! Cycles through the featured subset of the catalog. Only indices inside
//! the subset are accepted, mirroring the fact that only valid dots are ever
//! emitted to the client.

use serde::Serialize;

use super::media::{preview_gallery, MediaView};
use super::PriceLabel;
use crate::addressing::details_href;
use crate::error::CoreError;
use crate::game::GameRecord;
use crate::types::GameId;

/// Badge text on the featured banner.
pub const FEATURED_BADGE: &str = "Popular";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedView {
    pub banner: FeaturedBanner,
    pub dots: Vec<CarouselDot>,
    pub panel: FeaturedPanel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedBanner {
    pub id: GameId,
    pub href: String,
    pub image_url: String,
    pub name: String,
    pub badge: &'static str,
    pub platforms: Vec<String>,
    pub price: PriceLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselDot {
    pub index: usize,
    pub active: bool,
}

/// Expanded promotional panel next to the banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedPanel {
    pub name: String,
    pub tags: Vec<String>,
    pub description: String,
    pub publisher: String,
    /// Platforms joined with `", "`.
    pub platforms: String,
    pub release_date: String,
    pub gallery: Vec<MediaView>,
}

#[derive(Debug, Clone)]
pub struct Carousel<'a> {
    games: Vec<&'a GameRecord>,
    current_index: usize,
}

impl<'a> Carousel<'a> {
    pub fn new(games: Vec<&'a GameRecord>) -> Self {
        Self {
            games,
            current_index: 0,
        }
    }

    /// Start on dot `index`, or on the first game when `index` falls outside
    /// the subset.
    pub fn starting_at(games: Vec<&'a GameRecord>, index: usize) -> Self {
        let current_index = if index < games.len() { index } else { 0 };
        Self {
            games,
            current_index,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Jump to the game behind dot `index`.
    pub fn select_dot(&mut self, index: usize) -> Result<(), CoreError> {
        if index >= self.games.len() {
            return Err(CoreError::Validation(format!(
                "Featured index {index} is out of range (0..{})",
                self.games.len()
            )));
        }
        self.current_index = index;
        Ok(())
    }

    /// Move to the next featured game, wrapping after the last one.
    pub fn advance(&mut self) {
        if !self.games.is_empty() {
            self.current_index = (self.current_index + 1) % self.games.len();
        }
    }

    /// Render the current game. `None` when nothing is featured.
    pub fn render(&self) -> Option<FeaturedView> {
        let game = self.games.get(self.current_index)?;

        let dots = (0..self.games.len())
            .map(|index| CarouselDot {
                index,
                active: index == self.current_index,
            })
            .collect();

        Some(FeaturedView {
            banner: FeaturedBanner {
                id: game.id,
                href: details_href(game.id),
                image_url: game.banner_image().to_string(),
                name: game.name.clone(),
                badge: FEATURED_BADGE,
                platforms: game.platform.clone(),
                price: PriceLabel::for_price(game.price),
            },
            dots,
            panel: FeaturedPanel {
                name: game.name.clone(),
                tags: game.tags.clone(),
                description: game.description.clone(),
                publisher: game.publisher.clone(),
                platforms: game.platform.join(", "),
                release_date: game.release_date.clone(),
                gallery: preview_gallery(&game.media),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::game::fixtures::{game, image, youtube};

    fn featured() -> Vec<GameRecord> {
        vec![
            GameRecord {
                featured: true,
                featured_image: Some("wide-1.jpg".into()),
                platform: vec!["Windows".into(), "Mac".into()],
                media: vec![
                    youtube("https://youtu.be/dQw4w9WgXcQ"),
                    image("a.jpg"),
                    image("b.jpg"),
                    image("c.jpg"),
                    image("d.jpg"),
                ],
                ..game(1, "Portal 2")
            },
            GameRecord {
                featured: true,
                price: 0.0,
                ..game(2, "Dota 2")
            },
        ]
    }

    #[test]
    fn starts_on_first_game() {
        let games = featured();
        let carousel = Carousel::new(games.iter().collect());
        let view = carousel.render().unwrap();
        assert_eq!(view.banner.id, 1);
        assert_eq!(view.banner.image_url, "wide-1.jpg");
        assert_eq!(view.banner.badge, "Popular");
        assert_eq!(view.panel.platforms, "Windows, Mac");
        assert_eq!(view.dots.len(), 2);
        assert!(view.dots[0].active);
        assert!(!view.dots[1].active);
    }

    #[test]
    fn panel_gallery_is_trimmed_to_two_plus_remaining() {
        let games = featured();
        let view = Carousel::new(games.iter().collect()).render().unwrap();
        assert_eq!(view.panel.gallery.len(), 3);
        assert_matches!(&view.panel.gallery[2], MediaView::More { remaining: 3, .. });
    }

    #[test]
    fn select_dot_switches_game() {
        let games = featured();
        let mut carousel = Carousel::new(games.iter().collect());
        carousel.select_dot(1).unwrap();
        let view = carousel.render().unwrap();
        assert_eq!(view.banner.id, 2);
        assert_eq!(view.banner.price.text, "Free to Play");
        assert_eq!(view.banner.image_url, "img/2.jpg");
        assert!(view.dots[1].active);
    }

    #[test]
    fn out_of_range_dot_is_rejected_and_state_kept() {
        let games = featured();
        let mut carousel = Carousel::new(games.iter().collect());
        carousel.select_dot(1).unwrap();
        assert_matches!(carousel.select_dot(2), Err(CoreError::Validation(_)));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn starting_at_keeps_valid_index() {
        let games = featured();
        let carousel = Carousel::starting_at(games.iter().collect(), 1);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.render().unwrap().banner.id, 2);
    }

    #[test]
    fn starting_at_out_of_range_falls_back_to_first() {
        let games = featured();
        let carousel = Carousel::starting_at(games.iter().collect(), 5);
        assert_eq!(carousel.current_index(), 0);

        let empty = Carousel::starting_at(Vec::new(), 0);
        assert!(empty.render().is_none());
    }

    #[test]
    fn render_is_idempotent() {
        let games = featured();
        let carousel = Carousel::new(games.iter().collect());
        assert_eq!(carousel.render(), carousel.render());
    }

    #[test]
    fn advance_wraps_around() {
        let games = featured();
        let mut carousel = Carousel::new(games.iter().collect());
        carousel.advance();
        assert_eq!(carousel.current_index(), 1);
        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn nothing_featured_renders_nothing() {
        let mut carousel = Carousel::new(Vec::new());
        carousel.advance();
        assert!(carousel.is_empty());
        assert!(carousel.render().is_none());
        assert!(carousel.select_dot(0).is_err());
    }
}
