//! Per-page bootstrap data for the static site.
//!
//! A page loads the shared layout fragment and the catalog relative to its
//! own location; this bundles those addresses for a given pathname.

use serde::Serialize;

use crate::addressing::{
    base_path, catalog_url, landing_url, layout_fragment_url, HEADER_TEMPLATE_ID,
    SIDEBAR_TEMPLATE_ID,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub base_path: &'static str,
    pub landing_url: String,
    pub catalog_url: String,
    pub layout_url: String,
    pub templates: LayoutTemplates,
}

/// Named regions inside the layout fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutTemplates {
    pub sidebar: &'static str,
    pub header: &'static str,
}

/// Resolve addresses for the page at `pathname`. `cache_buster` is appended
/// to the catalog URL so every page load re-reads it.
pub fn page_context(pathname: &str, cache_buster: i64) -> PageContext {
    let base = base_path(pathname);
    PageContext {
        base_path: base,
        landing_url: landing_url(base),
        catalog_url: catalog_url(base, cache_buster),
        layout_url: layout_fragment_url(base),
        templates: LayoutTemplates {
            sidebar: SIDEBAR_TEMPLATE_ID,
            header: HEADER_TEMPLATE_ID,
        },
    }
}
