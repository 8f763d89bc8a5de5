//! Plant Catalog CLI - database seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Insert sample plants for local development
//! catalog-cli seed
//!
//! # Insert a specific number of sample plants
//! catalog-cli seed --count 3
//!
//! # Drop the plants and harvests collections
//! catalog-cli reset
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed the database with sample plants
//! - `reset` - Drop both catalog collections

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(author, version, about = "Plant catalog CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the database with sample plants
    Seed {
        /// Number of sample plants to insert
        #[arg(short, long, default_value_t = commands::seed::SAMPLE_PLANT_COUNT)]
        count: usize,
    },
    /// Drop the plants and harvests collections
    Reset,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { count } => commands::seed::run(count).await?,
        Commands::Reset => commands::reset::run().await?,
    }
    Ok(())
}
