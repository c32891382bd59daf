//! Where the catalog document comes from.
//!
//! The catalog is re-read on every view request; nothing is cached between
//! requests. Remote reads carry a cache-busting `v` parameter and a
//! `Cache-Control: no-cache` header so intermediaries never serve a stale
//! copy.

use std::path::PathBuf;

use reqwest::header::CACHE_CONTROL;
use storefront_core::catalog::CatalogStore;
use storefront_core::error::LoadError;

/// Cache-busting value appended to catalog URLs.
pub fn cache_buster() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A catalog location: a local file or an HTTP(S) URL.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    File(PathBuf),
    Remote {
        client: reqwest::Client,
        url: String,
    },
}

impl CatalogSource {
    /// Interpret a configured location. `http://` and `https://` values are
    /// fetched over the network; anything else is a file path.
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogSource::Remote {
                client: reqwest::Client::new(),
                url: location.to_string(),
            }
        } else {
            CatalogSource::File(PathBuf::from(location))
        }
    }

    /// Read the raw catalog document.
    pub async fn fetch_raw(&self) -> Result<Vec<u8>, LoadError> {
        match self {
            CatalogSource::File(path) => tokio::fs::read(path)
                .await
                .map_err(|e| LoadError::Unreachable(format!("{}: {e}", path.display()))),
            CatalogSource::Remote { client, url } => {
                let response = client
                    .get(url)
                    .query(&[("v", cache_buster())])
                    .header(CACHE_CONTROL, "no-cache")
                    .send()
                    .await
                    .map_err(|e| LoadError::Unreachable(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Unreachable(format!("{url} returned HTTP {status}")));
                }

                let body = response
                    .bytes()
                    .await
                    .map_err(|e| LoadError::Unreachable(e.to_string()))?;
                Ok(body.to_vec())
            }
        }
    }

    /// Read and parse a fresh catalog snapshot.
    pub async fn load(&self) -> Result<CatalogStore, LoadError> {
        let bytes = self.fetch_raw().await?;
        let store = CatalogStore::from_json(&bytes)?;
        tracing::debug!(games = store.len(), "Catalog loaded");
        Ok(store)
    }
}
