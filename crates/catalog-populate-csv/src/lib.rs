//! CSV writers for catalog-seed.
//!
//! This crate streams records from the catalog-generator crate into the
//! seed files consumed by the database bulk loader and the fixture files
//! consumed by the load-testing tool.
//!
//! # Example
//!
//! ```ignore
//! use catalog_generator::CatalogGenerator;
//! use catalog_populate_csv::{CSVPopulator, FixtureExporter};
//!
//! let mut populator = CSVPopulator::new(CatalogGenerator::new(42));
//! populator.populate_seed_files("generated", 2000, 100_000)?;
//!
//! FixtureExporter::new(populator.generator_mut(), "jmeter/data").export(2000, 100_000)?;
//! ```

pub mod args;
mod error;
pub mod fixtures;
mod populator;

pub use args::CatalogArgs;
pub use error::CSVPopulatorError;
pub use fixtures::FixtureExporter;
pub use populator::{
    write_csv, CSVPopulator, PopulateMetrics, CATEGORIES_FILE, DEFAULT_BUFFER_SIZE, ITEMS_FILE,
};
