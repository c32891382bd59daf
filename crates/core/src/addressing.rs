//! Page addressing for the static site.
//!
//! The landing page lives at the site root and the details page one level
//! down under `Assets/Components/`. Pages in that folder reach shared files
//! (catalog, landing page, layout fragment) through a `../../` base path.

use crate::types::GameId;

/// Folder holding nested pages and the shared layout fragment.
pub const COMPONENTS_DIR: &str = "Assets/Components/";

pub const LANDING_PAGE: &str = "index.html";
pub const DETAILS_PAGE: &str = "details.html";
pub const LAYOUT_FRAGMENT: &str = "NavComponents.html";
pub const CATALOG_DOCUMENT: &str = "games.json";

/// Template ids exposed by the layout fragment.
pub const SIDEBAR_TEMPLATE_ID: &str = "sidebar-component";
pub const HEADER_TEMPLATE_ID: &str = "header-component";

/// Relative prefix from the page at `pathname` back to the site root.
pub fn base_path(pathname: &str) -> &'static str {
    if pathname.contains(&format!("/{COMPONENTS_DIR}")) {
        "../../"
    } else {
        ""
    }
}

/// Link from the landing page to a game's details page.
pub fn details_href(id: GameId) -> String {
    format!("{COMPONENTS_DIR}{DETAILS_PAGE}?id={id}")
}

pub fn landing_url(base: &str) -> String {
    format!("{base}{LANDING_PAGE}")
}

pub fn layout_fragment_url(base: &str) -> String {
    format!("{base}{COMPONENTS_DIR}{LAYOUT_FRAGMENT}")
}

/// Catalog URL with a cache-busting `v` parameter.
pub fn catalog_url(base: &str, cache_buster: i64) -> String {
    format!("{base}{CATALOG_DOCUMENT}?v={cache_buster}")
}

/// Parse the `id` query value the way a browser `parseInt` would: leading
/// whitespace is skipped, an optional sign is honoured, and parsing stops at
/// the first non-digit. Returns `None` when no digits lead the value.
pub fn parse_game_id(raw: &str) -> Option<GameId> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: GameId = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
