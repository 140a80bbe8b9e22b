//! Generation settings.
//!
//! Settings are resolved from three layers, lowest precedence first:
//! built-in defaults, an optional YAML file, and CLI overrides applied by
//! the caller.
//!
//! ```yaml
//! categories: 2000
//! items: 100000
//! seed: 42
//! output_dir: generated
//! fixtures_dir: jmeter/data
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Number of categories written to the seed files.
pub const DEFAULT_CATEGORY_COUNT: u64 = 2000;

/// Number of items written to the seed files.
pub const DEFAULT_ITEM_COUNT: u64 = 100_000;

/// Rows per payload fixture file.
pub const DEFAULT_PAYLOAD_ROWS: u64 = 1000;

/// Lorem ipsum sentences joined into each heavy payload description.
pub const DEFAULT_DESCRIPTION_SENTENCES: usize = 100;

/// Directory for `categories.csv` and `items.csv`.
pub const DEFAULT_OUTPUT_DIR: &str = "generated";

/// Directory for the load-testing fixture files.
pub const DEFAULT_FIXTURES_DIR: &str = "jmeter/data";

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Category count of zero leaves nothing for items and payloads to reference
    #[error("Category count must be positive (got 0 categories for {items} items)")]
    NoCategories { items: u64 },
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Number of category records
    pub categories: u64,

    /// Number of item records
    pub items: u64,

    /// Random seed; `None` seeds from the operating system
    pub seed: Option<u64>,

    /// Directory for the seed files
    pub output_dir: PathBuf,

    /// Directory for the fixture files
    pub fixtures_dir: PathBuf,

    /// Rows per payload fixture file
    pub payload_rows: u64,

    /// Sentences per heavy payload description
    pub description_sentences: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORY_COUNT,
            items: DEFAULT_ITEM_COUNT,
            seed: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
            payload_rows: DEFAULT_PAYLOAD_ROWS,
            description_sentences: DEFAULT_DESCRIPTION_SENTENCES,
        }
    }
}

impl CatalogConfig {
    /// Load config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from YAML string. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Check that the counts can produce a consistent data set.
    ///
    /// Item counts below the category count are accepted; the affected
    /// categories simply end up with no items.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories == 0 {
            return Err(ConfigError::NoCategories { items: self.items });
        }
        Ok(())
    }

    /// Integer average of items per category, as reported in the run summary.
    pub fn items_per_category(&self) -> u64 {
        if self.categories == 0 {
            0
        } else {
            self.items / self.categories
        }
    }
}
