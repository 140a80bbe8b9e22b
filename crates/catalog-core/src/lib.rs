//! Core types for catalog-seed.
//!
//! This crate provides the foundational types shared by the generator and
//! the CSV writers:
//!
//! - [`CatalogConfig`] - Generation settings loaded from defaults, YAML and CLI
//! - [`Category`], [`Item`] - Seed records for the benchmark database
//! - [`ItemPayload`], [`HeavyItemPayload`], [`CategoryPayload`] - Request
//!   bodies for the load-testing tool
//! - [`CategoryIdRow`], [`ItemIdRow`] - Single-column id lists
//!
//! # Architecture
//!
//! ```text
//! catalog-core (this crate)
//!    │
//!    ├─── catalog-generator     (synthesizes records)
//!    │
//!    └─── catalog-populate-csv  (streams records into CSV files)
//! ```

pub mod config;
pub mod records;

// Re-exports for convenience
pub use config::{
    CatalogConfig, ConfigError, DEFAULT_CATEGORY_COUNT, DEFAULT_DESCRIPTION_SENTENCES,
    DEFAULT_FIXTURES_DIR, DEFAULT_ITEM_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_PAYLOAD_ROWS,
};
pub use records::{
    Category, CategoryIdRow, CategoryPayload, CsvRecord, HeavyItemPayload, Item, ItemIdRow,
    ItemPayload,
};
