use std::path::PathBuf;

use storefront_core::pagination::DEFAULT_PAGE_SIZE;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Catalog file path or `http(s)://` URL (default: `games.json`).
    pub catalog_source: String,
    /// Cards per landing page (default: `12`).
    pub page_size: usize,
    /// Suffix used in detail page titles (default: `Steam`).
    pub site_name: String,
    /// Directory holding the static site, served for unmatched paths.
    pub site_dir: Option<PathBuf>,
    /// PostgreSQL URL for feedback storage. Unset means in-memory storage.
    pub database_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default       |
    /// |------------------------|---------------|
    /// | `HOST`                 | `0.0.0.0`     |
    /// | `PORT`                 | `3000`        |
    /// | `CORS_ORIGINS`         | `*`           |
    /// | `REQUEST_TIMEOUT_SECS` | `30`          |
    /// | `CATALOG_SOURCE`       | `games.json`  |
    /// | `PAGE_SIZE`            | `12`          |
    /// | `SITE_NAME`            | `Steam`       |
    /// | `SITE_DIR`             | unset         |
    /// | `DATABASE_URL`         | unset         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let catalog_source =
            std::env::var("CATALOG_SOURCE").unwrap_or_else(|_| "games.json".into());

        let page_size: usize = std::env::var("PAGE_SIZE")
            .map(|v| v.parse().expect("PAGE_SIZE must be a valid usize"))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        assert!(page_size > 0, "PAGE_SIZE must be at least 1");

        let site_name = std::env::var("SITE_NAME").unwrap_or_else(|_| "Steam".into());

        let site_dir = std::env::var("SITE_DIR").ok().map(PathBuf::from);

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            catalog_source,
            page_size,
            site_name,
            site_dir,
            database_url,
        }
    }

    /// Whether CORS should allow any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}
