//! Command-line interface for catalog-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Everything, default counts, fresh random content
//! catalog-seed all
//!
//! # Seed files only, reproducible
//! catalog-seed seed --seed 42 --output-dir database/generated
//!
//! # Fixture files only
//! catalog-seed fixtures --fixtures-dir jmeter/data --categories 2000 --items 100000
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::Context;
use catalog_populate_csv::CatalogArgs;
use catalog_seed::Stage;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalog-seed")]
#[command(about = "Generate benchmark seed data and load-test fixtures as CSV")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write seed files, then load-test fixtures
    All {
        #[command(flatten)]
        args: CatalogArgs,
    },

    /// Write categories.csv and items.csv
    Seed {
        #[command(flatten)]
        args: CatalogArgs,
    },

    /// Write load-test fixture files (id lists and request payloads)
    Fixtures {
        #[command(flatten)]
        args: CatalogArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let (stage, args) = match cli.command {
        Commands::All { args } => (Stage::All, args),
        Commands::Seed { args } => (Stage::Seed, args),
        Commands::Fixtures { args } => (Stage::Fixtures, args),
    };

    let config = args.resolve().context("Invalid configuration")?;
    let report = catalog_seed::run(&config, stage)?;

    tracing::info!("\n{report}");
    tracing::info!(
        "Done: {} rows, {} bytes across {} files",
        report.total_rows(),
        report.total_bytes(),
        report.files.len()
    );

    Ok(())
}
