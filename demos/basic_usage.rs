//! Basic usage example for karnataka-trails
//!
//! This example demonstrates how to:
//! - Configure the backend address and build a client
//! - Load the place collection into the explorer
//! - Derive the category picker entries
//! - Filter the collection by query and category
//!
//! Run it against a live backend:
//!
//! ```text
//! TRAILS_BACKEND_URL=http://localhost:8000 cargo run --example basic_usage
//! ```

use trails_core::{Config, Explorer, Result, TrailsClient};

fn main() -> Result<()> {
    println!("=== Karnataka Trails Basic Usage Example ===\n");

    // Build the client and load the collection
    let config = Config::from_env();
    println!("Loading places from {}...", config.backend_url);
    let client = TrailsClient::new(&config)?;

    let mut explorer = Explorer::new();
    explorer.load(&client);
    if let Some(banner) = explorer.error_banner() {
        eprintln!("✗ {banner}");
        return Ok(());
    }
    println!("✓ Loaded {} places\n", explorer.items().len());

    // Example 1: Derived categories
    println!("--- Example 1: Category picker entries ---");
    for category in explorer.categories() {
        println!("- {category}");
    }
    println!();

    // Example 2: Free-text query
    println!("--- Example 2: Places matching 'temple' ---");
    explorer.set_query("temple");
    for place in explorer.filtered() {
        println!("- {} — {} [{}]", place.name, place.city, place.category);
    }
    println!();

    // Example 3: Category restriction on top of the query
    println!("--- Example 3: Restricting to one category ---");
    explorer.set_query("");
    explorer.set_category("Palace");
    for place in explorer.filtered() {
        println!("- {} — {}", place.name, place.city);
    }
    println!();

    // Example 4: Reset brings back the whole collection
    explorer.reset_filters();
    println!(
        "--- Example 4: After reset, {} places visible ---",
        explorer.filtered().len()
    );

    Ok(())
}
