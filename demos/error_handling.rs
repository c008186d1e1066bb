//! Error handling example for karnataka-trails
//!
//! This example demonstrates how load and seed failures surface as a single
//! banner string while the explorer keeps its last collection.

use trails_core::{Config, Explorer, Phase, TrailsClient, TrailsError};

fn main() -> trails_core::Result<()> {
    println!("=== Karnataka Trails Error Handling Example ===\n");

    // Example 1: A backend that is not running
    println!("--- Example 1: Unreachable backend ---");
    let dead = TrailsClient::new(&Config::new("http://localhost:59999"))?;
    let mut explorer = Explorer::new();
    explorer.load(&dead);
    match explorer.error_banner() {
        Some(banner) => println!("✗ {banner}"),
        None => println!("✓ Unexpectedly reachable"),
    }
    println!("Phase: {:?}\n", explorer.phase());

    // Example 2: The collection survives a failed reload
    println!("--- Example 2: Stale data keeps rendering ---");
    let ticket = explorer.begin_load();
    explorer.finish_load(
        ticket,
        Ok(vec![trails_core::Place {
            name: "Hampi".to_string(),
            city: "Hampi".to_string(),
            category: "Ruins".to_string(),
            ..Default::default()
        }]),
    );
    let ticket = explorer.begin_load();
    explorer.finish_load(ticket, Err(TrailsError::Load { status: 500 }));
    println!("Phase after failed reload: {:?}", explorer.phase());
    println!("Still visible: {} place(s)\n", explorer.items().len());
    assert_eq!(explorer.phase(), Phase::Errored);
    assert_eq!(explorer.items().len(), 1);

    // Example 3: Seed failures set the banner without touching the flag
    println!("--- Example 3: Seed failure ---");
    explorer.fail_seed(TrailsError::Seed);
    if let Some(banner) = explorer.error_banner() {
        println!("✗ {banner}");
    }
    println!("Loading flag: {}", explorer.is_loading());

    Ok(())
}
