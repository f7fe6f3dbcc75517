//! Centralized configuration management.
//!
//! All environment variables are loaded at startup through this module.
//! This prevents scattered `env::var()` calls.

/// Application configuration loaded from environment variables.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JWT signing secret (default: "secret" - CHANGE IN PRODUCTION)
    pub secret_key: String,
    /// ListenBrainz API base URL (default: "https://api.listenbrainz.org")
    pub listenbrainz_url: String,
    /// Number of recent listens shown on a profile (default: 25)
    pub listens_page_size: usize,
    /// HTTP server port (default: 9765)
    pub port: u16,
    /// HTTP server bind address (default: "0.0.0.0")
    pub ip: String,
}

#[cfg(feature = "server")]
impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            secret_key: std::env::var("SECRET_KEY").unwrap_or_else(|_| "secret".to_string()),
            listenbrainz_url: std::env::var("LISTENBRAINZ_URL")
                .unwrap_or_else(|_| listenpin::listenbrainz::DEFAULT_API_URL.to_string()),
            listens_page_size: std::env::var("LISTENS_PAGE_SIZE")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(25),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(9765),
            ip: std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }

    /// Get the JWT secret key.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Get the ListenBrainz API base URL.
    pub fn listenbrainz_url(&self) -> &str {
        &self.listenbrainz_url
    }

    pub fn listens_page_size(&self) -> usize {
        self.listens_page_size
    }
}

#[cfg(feature = "server")]
use std::sync::LazyLock;

/// Global application configuration singleton.
/// Loaded once at startup from environment variables.
#[cfg(feature = "server")]
pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_env);
