//! Query parameter types for API handlers.
//!
//! Numeric parameters are taken as strings so junk input falls through to
//! the view-state guards instead of being rejected by the extractor.

use serde::Deserialize;

/// `GET /catalog?q=&page=&featured=`
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub q: Option<String>,
    pub page: Option<String>,
    pub featured: Option<String>,
}

impl CatalogParams {
    pub fn page(&self) -> Option<i64> {
        parse_number(self.page.as_deref())
    }

    pub fn featured(&self) -> Option<usize> {
        parse_number(self.featured.as_deref())
    }
}

/// `GET /details?id=`
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    pub id: Option<String>,
}

/// `GET /page-context?path=`
#[derive(Debug, Default, Deserialize)]
pub struct PageContextParams {
    pub path: Option<String>,
}

fn parse_number<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn junk_numbers_are_dropped() {
        let params = CatalogParams {
            q: None,
            page: Some("two".into()),
            featured: Some("-1".into()),
        };
        assert_eq!(params.page(), None);
        assert_eq!(params.featured(), None);
    }

    #[test]
    fn valid_numbers_are_parsed() {
        let params = CatalogParams {
            q: Some("portal".into()),
            page: Some(" 3 ".into()),
            featured: Some("1".into()),
        };
        assert_eq!(params.page(), Some(3));
        assert_eq!(params.featured(), Some(1));
    }
}
