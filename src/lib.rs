//! karnataka-trails
//! ================
//!
//! Root workspace crate. The actual functionality lives in the member
//! crates:
//!
//! - [`trails-core`](https://docs.rs/trails-core) — place model, backend
//!   client, category derivation and filtering, explorer controller.
//! - `trails-cli` — command-line interface over the core.
//! - `trails-wasm` — browser bindings for the filter pipeline.
//!
//! The `demos/` directory contains runnable examples against the core:
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example error_handling
//! ```

pub use trails_core;
