// crates/trails-core/src/error.rs

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrailsError>;

/// Everything that can go wrong while talking to the backend.
///
/// The UI policy is deliberately coarse: callers reduce any of these to a
/// single displayable string (see [`crate::Explorer::error_banner`]). The
/// variants exist so the load path can carry its HTTP status while the seed
/// path stays unqualified, matching the two endpoints' contracts.
#[derive(Debug, Error)]
pub enum TrailsError {
    /// `GET /places` answered with a non-success status.
    #[error("Failed to load places ({status})")]
    Load { status: u16 },

    /// `POST /seed` answered with a non-success status. No status detail.
    #[error("Seeding failed")]
    Seed,

    /// The `/places` body was not valid JSON.
    #[error("Failed to load places: {0}")]
    Parse(#[from] serde_json::Error),

    /// Transport-level failure (connection refused, DNS, ...).
    #[cfg(feature = "client")]
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),
}
