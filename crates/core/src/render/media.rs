//! Gallery projections shared by the carousel panel and the detail page.

use serde::Serialize;

use crate::game::{MediaItem, MediaKind};
use crate::youtube::{embed_url, extract_video_id, video_id_or_raw};

/// How many gallery entries the carousel panel shows before collapsing the
/// rest into a single "+N" card.
pub const PANEL_PREVIEW_COUNT: usize = 2;

/// One rendered gallery cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MediaView {
    #[serde(rename_all = "camelCase")]
    Image { url: String, alt: String },
    #[serde(rename_all = "camelCase")]
    Video { video_id: String, embed_url: String },
    /// Placeholder standing in for the items not shown.
    #[serde(rename_all = "camelCase")]
    More { remaining: usize, label: String },
}

impl MediaView {
    fn video(video_id: &str) -> Self {
        MediaView::Video {
            video_id: video_id.to_string(),
            embed_url: embed_url(video_id),
        }
    }
}

/// Carousel panel gallery: the first two items verbatim, then one "+N" card
/// counting everything past them. Nothing beyond index 2 is rendered.
///
/// A video whose id cannot be extracted is embedded with its raw URL.
pub fn preview_gallery(media: &[MediaItem]) -> Vec<MediaView> {
    let mut views: Vec<MediaView> = media
        .iter()
        .take(PANEL_PREVIEW_COUNT)
        .enumerate()
        .filter_map(|(i, item)| match item.kind {
            MediaKind::Youtube => Some(MediaView::video(video_id_or_raw(&item.url))),
            MediaKind::Image => Some(MediaView::Image {
                url: item.url.clone(),
                alt: format!("Screenshot {}", i + 1),
            }),
            MediaKind::Unknown => None,
        })
        .collect();

    if media.len() > PANEL_PREVIEW_COUNT {
        let remaining = media.len() - PANEL_PREVIEW_COUNT;
        views.push(MediaView::More {
            remaining,
            label: format!("+{remaining}"),
        });
    }

    views
}

/// Detail page gallery: every item, in order.
///
/// Videos whose id cannot be extracted are skipped; images never are.
pub fn full_gallery(media: &[MediaItem], game_name: &str) -> Vec<MediaView> {
    media
        .iter()
        .filter_map(|item| match item.kind {
            MediaKind::Image => Some(MediaView::Image {
                url: item.url.clone(),
                alt: format!("{game_name} screenshot"),
            }),
            MediaKind::Youtube => extract_video_id(&item.url).map(MediaView::video),
            MediaKind::Unknown => None,
        })
        .collect()
}
