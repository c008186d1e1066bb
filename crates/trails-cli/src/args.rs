use clap::{Parser, Subcommand};

/// CLI arguments for trails-cli
#[derive(Debug, Parser)]
#[command(
    name = "trails",
    version,
    about = "CLI for browsing the Karnataka Trails heritage-places backend"
)]
pub struct CliArgs {
    /// Backend base address (default: $TRAILS_BACKEND_URL or http://localhost:8000)
    #[arg(short = 'b', long = "backend", global = true)]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded collection
    Stats,

    /// List places, optionally filtered by a query and/or category
    Places {
        /// Substring to search in name, city, region, description and tags
        query: Option<String>,

        /// Restrict to one category (exact label, e.g. "Palace")
        #[arg(short = 'c', long = "category")]
        category: Option<String>,
    },

    /// List the distinct categories present in the collection
    Categories,

    /// Seed demo data on the backend, then reload and show the result
    Seed,
}
