//! trails-cli — Command-line interface for trails-core
//!
//! This binary provides a simple way to browse the Karnataka Trails
//! backend from your terminal. It supports printing collection statistics,
//! listing and filtering places, listing the derived categories, and
//! seeding demo data.
//!
//! Usage examples
//! --------------
//!
//! - Show collection stats
//!   $ trails-cli stats
//!
//! - List all places, or filter them
//!   $ trails-cli places
//!   $ trails-cli places hampi
//!   $ trails-cli places --category Palace
//!   $ trails-cli places chalukya --category Temple
//!
//! - Show the category picker entries
//!   $ trails-cli categories
//!
//! - Seed demo data and show what came back
//!   $ trails-cli seed
//!
//! Backend address
//! ---------------
//!
//! By default the CLI reads `TRAILS_BACKEND_URL` and falls back to
//! `http://localhost:8000`. Use `--backend <url>` to point at a different
//! deployment for a single invocation.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use trails_core::{Config, Explorer, TrailsClient};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Explicit flag wins over the environment.
    let config = match args.backend {
        Some(url) => Config::new(url),
        None => Config::from_env(),
    };

    let client = TrailsClient::new(&config).context("failed to build HTTP client")?;
    let mut explorer = Explorer::new();

    match args.command {
        Commands::Stats => {
            explorer.load(&client);
            bail_on_banner(&explorer)?;
            let categories = explorer.categories();
            println!("Collection statistics ({}):", client.backend_url());
            println!("  Places: {}", explorer.items().len());
            println!("  Categories: {}", categories.len() - 1);
        }

        Commands::Places { query, category } => {
            explorer.load(&client);
            bail_on_banner(&explorer)?;
            if let Some(q) = query {
                explorer.set_query(q);
            }
            if let Some(c) = category {
                explorer.set_category(c);
            }

            let matches = explorer.filtered();
            if matches.is_empty() {
                println!("No places found. Try seeding demo data with: trails-cli seed");
            } else {
                for place in matches {
                    print_place(place);
                }
            }
        }

        Commands::Categories => {
            explorer.load(&client);
            bail_on_banner(&explorer)?;
            for category in explorer.categories() {
                println!("- {category}");
            }
        }

        Commands::Seed => {
            explorer.seed(&client);
            bail_on_banner(&explorer)?;
            println!("Seeded demo data; backend now serves {} places:", explorer.items().len());
            for place in explorer.filtered() {
                print_place(place);
            }
        }
    }

    Ok(())
}

fn print_place(place: &trails_core::Place) {
    let mut line = format!("{} — {}", place.name, place.city);
    if let Some(region) = &place.region {
        line.push_str(&format!(", {region}"));
    }
    if !place.category.is_empty() {
        line.push_str(&format!(" [{}]", place.category));
    }
    if let Some(era) = &place.era {
        line.push_str(&format!(" ({era})"));
    }
    println!("{line}");
    if !place.tags.is_empty() {
        println!("    #{}", place.tags.join(" #"));
    }
}

fn bail_on_banner(explorer: &Explorer) -> anyhow::Result<()> {
    match explorer.error_banner() {
        Some(banner) => Err(anyhow::anyhow!(banner)),
        None => Ok(()),
    }
}
