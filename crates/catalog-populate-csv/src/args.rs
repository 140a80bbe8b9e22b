//! CLI argument definitions shared by all catalog-seed commands.

use catalog_core::{CatalogConfig, ConfigError};
use clap::Args;
use std::path::PathBuf;

/// Arguments that override the generation config.
///
/// Values given here take precedence over the YAML file passed with
/// `--config`, which in turn takes precedence over built-in defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct CatalogArgs {
    /// Path to a YAML config file
    #[arg(long, short = 'c', env = "CATALOG_SEED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of categories to generate [default: 2000]
    #[arg(long)]
    pub categories: Option<u64>,

    /// Number of items to generate [default: 100000]
    #[arg(long)]
    pub items: Option<u64>,

    /// Random seed for reproducible content (omit for a fresh random run)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory for categories.csv and items.csv [default: generated]
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Output directory for load-test fixture files [default: jmeter/data]
    #[arg(long)]
    pub fixtures_dir: Option<PathBuf>,
}

impl CatalogArgs {
    /// Build the effective config: defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<CatalogConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        };

        if let Some(categories) = self.categories {
            config.categories = categories;
        }
        if let Some(items) = self.items {
            config.items = items;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(fixtures_dir) = &self.fixtures_dir {
            config.fixtures_dir = fixtures_dir.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
