//! trails-wasm — WebAssembly bindings for trails-core
//!
//! This crate exposes the pure filter pipeline of `trails-core` to
//! JavaScript. Fetching stays on the JS side (the browser already has
//! `fetch`); the page passes the decoded `items` array in and gets the
//! derived views back as plain JSON-serializable values.
//!
//! What it provides
//! ----------------
//! - `all_categories_sentinel()` — the "All" picker entry
//! - `derive_categories(places)` — `["All", ...distinct categories]`
//! - `apply_filter(places, query, category)` — the filtered subsequence
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { derive_categories, apply_filter } from 'trails-wasm';
//!
//! async function main() {
//!   await init();
//!   const res = await fetch(`${backend}/places`);
//!   const { items = [] } = await res.json();
//!
//!   console.log(derive_categories(items));          // ["All", "Palace", ...]
//!   console.log(apply_filter(items, 'hampi', ''));  // matching places
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Inputs that are not an array of place objects yield empty results
//!   rather than throwing; rendering must never crash on odd data.
//! - All exported functions are `wasm_bindgen` bindings returning plain
//!   types or `JsValue` containing JSON-serializable arrays.

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

// Core Imports
use trails_core::{apply_filter as core_apply_filter, derive_categories as core_derive_categories};
use trails_core::{Place, ALL_CATEGORIES};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing Karnataka Trails WASM module...".into());
}

/// The sentinel label the category picker maps to "no filter".
#[wasm_bindgen]
pub fn all_categories_sentinel() -> String {
    ALL_CATEGORIES.to_string()
}

/// `["All"]` followed by the distinct non-empty categories in first-seen
/// order.
#[wasm_bindgen]
pub fn derive_categories(places: JsValue) -> JsValue {
    let places = decode_places(places);
    let categories = core_derive_categories(&places);
    to_value(&categories).unwrap_or(JsValue::NULL)
}

/// The subsequence of `places` matching `query` and `category`, in source
/// order. An empty `query` and an empty or `"All"` `category` are
/// unrestricted.
#[wasm_bindgen]
pub fn apply_filter(places: JsValue, query: &str, category: &str) -> JsValue {
    let places = decode_places(places);
    let filtered: Vec<&Place> = core_apply_filter(&places, query, category);
    to_value(&filtered).unwrap_or(JsValue::NULL)
}

/// Decodes the JS `items` array, treating anything malformed as empty.
fn decode_places(places: JsValue) -> Vec<Place> {
    from_value(places).unwrap_or_default()
}
