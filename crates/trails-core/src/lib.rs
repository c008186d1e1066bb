// crates/trails-core/src/lib.rs

//! # trails-core
//!
//! Client core for the Karnataka Trails heritage-places backend.
//!
//! The crate is split along the one-way data flow of the app:
//!
//! - [`model`] — immutable [`Place`] snapshots as the backend serves them
//! - [`client`] — the data loader (`GET /places`, `POST /seed`)
//! - [`filter`] — the two pure derivation functions (categories, filtered view)
//! - [`controller`] — the single stateful owner tying loads and filters together
//!
//! ```no_run
//! use trails_core::{Config, Explorer, TrailsClient};
//!
//! fn main() -> trails_core::Result<()> {
//!     let client = TrailsClient::new(&Config::from_env())?;
//!     let mut explorer = Explorer::new();
//!     explorer.load(&client);
//!
//!     explorer.set_query("hampi");
//!     for place in explorer.filtered() {
//!         println!("{} — {}", place.name, place.city);
//!     }
//!     Ok(())
//! }
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod model;
pub mod text;

// Re-exports
pub use crate::config::Config;
pub use crate::controller::{Explorer, LoadTicket, Phase};
pub use crate::error::{Result, TrailsError};
pub use crate::filter::{apply_filter, derive_categories, ALL_CATEGORIES};
pub use crate::model::{Place, PlacesResponse};
pub use crate::text::{equals_folded, fold_key};

#[cfg(feature = "client")]
pub use crate::client::TrailsClient;
