//! YouTube video id extraction shared by the carousel and detail views.

use std::sync::LazyLock;

use regex::Regex;

/// Length of a YouTube video id.
pub const VIDEO_ID_LEN: usize = 11;

/// Base URL for embeddable players.
pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Tried in order; the first capture group is the id. The id runs until the
/// next `&`, `?`, `#`, newline or the end of the string.
static VIDEO_ID_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&?#\n]+)")
            .expect("valid regex"),
        Regex::new(r"youtube\.com/watch\?[^#\n]*?&v=([^&?#\n]+)").expect("valid regex"),
    ]
});

/// Extract the video id from a bare id or a watch/short/embed URL.
///
/// Returns `None` when nothing recognisable is found.
///
/// # Examples
///
/// ```
/// use storefront_core::youtube::extract_video_id;
/// assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
/// assert_eq!(extract_video_id("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
/// assert_eq!(extract_video_id("https://vimeo.com/1"), None);
/// ```
pub fn extract_video_id(url: &str) -> Option<&str> {
    if is_bare_id(url) {
        return Some(url);
    }

    VIDEO_ID_PATTERNS.iter().find_map(|re| {
        re.captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    })
}

/// Like [`extract_video_id`] but hands back the input unchanged on failure.
///
/// Embedding the raw value yields a broken player, which the carousel accepts.
pub fn video_id_or_raw(url: &str) -> &str {
    extract_video_id(url).unwrap_or(url)
}

/// Embeddable player URL for a video id.
pub fn embed_url(video_id: &str) -> String {
    format!("{EMBED_BASE_URL}{video_id}")
}

fn is_bare_id(value: &str) -> bool {
    value.chars().count() == VIDEO_ID_LEN && !value.contains('/') && !value.contains('?')
}
