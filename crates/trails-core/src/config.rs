// crates/trails-core/src/config.rs

use std::env;

/// Environment variable naming the backend base address.
pub const BACKEND_URL_ENV: &str = "TRAILS_BACKEND_URL";

/// Fallback when the environment does not name a backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Process-wide configuration, resolved once at startup and injected
/// explicitly from there on. There is no other global state in the crate.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base address of the backend, without a trailing slash.
    pub backend_url: String,
}

impl Config {
    /// Builds a config for an explicit backend address.
    pub fn new(backend_url: impl Into<String>) -> Self {
        let mut backend_url = backend_url.into();
        while backend_url.ends_with('/') {
            backend_url.pop();
        }
        Self { backend_url }
    }

    /// Resolves the backend address from `TRAILS_BACKEND_URL`, falling back
    /// to [`DEFAULT_BACKEND_URL`]. Empty or whitespace-only values count as
    /// unset.
    pub fn from_env() -> Self {
        match env::var(BACKEND_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_BACKEND_URL),
        }
    }

    /// Full URL for the place listing endpoint.
    pub fn places_url(&self) -> String {
        format!("{}/places", self.backend_url)
    }

    /// Full URL for the demo-data seed endpoint.
    pub fn seed_url(&self) -> String {
        format!("{}/seed", self.backend_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
