//! catalog-seed library
//!
//! Generates synthetic categories and items for seeding a benchmark
//! database, plus fixture files for the load-testing tool that drives it.
//!
//! # Pipeline
//!
//! ```text
//! CatalogConfig ──► categories.csv ──► items.csv ──► jmeter fixtures ──► RunReport
//!                     (N rows)         (M rows,       (ids, payloads)
//!                                       bucketed by N)
//! ```
//!
//! Each stage writes its own files; the only state carried between them is
//! the random source and the category count.
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed files and fixtures with default counts (2000 categories, 100000 items)
//! catalog-seed all
//!
//! # Reproducible small data set
//! catalog-seed seed --categories 5 --items 12 --seed 42 --output-dir /tmp/generated
//!
//! # Fixtures only, counts from a config file
//! catalog-seed fixtures --config catalog.yaml
//! ```

pub mod summary;

use anyhow::Context;
use catalog_core::CatalogConfig;
use catalog_generator::CatalogGenerator;
use catalog_populate_csv::{CSVPopulator, FixtureExporter};

pub use summary::RunReport;

/// Which files a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Seed files, then fixtures
    All,
    /// `categories.csv` and `items.csv` only
    Seed,
    /// Fixture files only
    Fixtures,
}

impl Stage {
    fn writes_seed_files(self) -> bool {
        matches!(self, Stage::All | Stage::Seed)
    }

    fn writes_fixtures(self) -> bool {
        matches!(self, Stage::All | Stage::Fixtures)
    }
}

/// Run the requested stages with a generator built from `config.seed`.
pub fn run(config: &CatalogConfig, stage: Stage) -> anyhow::Result<RunReport> {
    run_with_generator(config, stage, CatalogGenerator::from_seed(config.seed))
}

/// Run the requested stages drawing all randomness from `generator`.
pub fn run_with_generator(
    config: &CatalogConfig,
    stage: Stage,
    generator: CatalogGenerator,
) -> anyhow::Result<RunReport> {
    match config.seed {
        Some(seed) => tracing::info!("Generating catalog data (seed={seed})"),
        None => tracing::info!("Generating catalog data (unseeded)"),
    }
    if config.items < config.categories {
        tracing::warn!(
            "Fewer items ({}) than categories ({}); some categories will be empty",
            config.items,
            config.categories
        );
    }

    let mut populator = CSVPopulator::new(generator);
    let mut report = RunReport::new(config.clone());
    let mut category_count = config.categories;

    if stage.writes_seed_files() {
        let metrics = populator
            .populate_seed_files(&config.output_dir, config.categories, config.items)
            .with_context(|| {
                format!(
                    "Failed to write seed files to {}",
                    config.output_dir.display()
                )
            })?;
        category_count = metrics[0].rows_written;
        report.files.extend(metrics);
    }

    if stage.writes_fixtures() {
        let metrics = FixtureExporter::new(populator.generator_mut(), &config.fixtures_dir)
            .with_payload_rows(config.payload_rows)
            .with_description_sentences(config.description_sentences)
            .export(category_count, config.items)
            .with_context(|| {
                format!(
                    "Failed to write fixture files to {}",
                    config.fixtures_dir.display()
                )
            })?;
        report.files.extend(metrics);
    }

    Ok(report)
}
