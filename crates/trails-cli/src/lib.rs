//! trails-cli
//! ==========
//!
//! Command-line interface for the `trails-core` Karnataka Trails client.
//!
//! This crate primarily provides a binary (`trails-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install trails-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! trails-cli --help
//! trails-cli stats
//! trails-cli places hampi --category Ruins
//! trails-cli seed
//! ```
//!
//! For programmatic access to the place model and the filter pipeline, use
//! the [`trails-core`](https://docs.rs/trails-core) crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
