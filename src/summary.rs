//! End-of-run summary.

use catalog_core::CatalogConfig;
use catalog_populate_csv::{PopulateMetrics, CATEGORIES_FILE, ITEMS_FILE};
use std::fmt;

const RULE: &str = "============================================================";

/// Files written by one run, with the config that produced them.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub config: CatalogConfig,
    pub files: Vec<PopulateMetrics>,
}

impl RunReport {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            files: Vec::new(),
        }
    }

    /// Total data rows across all files.
    pub fn total_rows(&self) -> u64 {
        self.files.iter().map(|m| m.rows_written).sum()
    }

    /// Total bytes across all files.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|m| m.file_size_bytes).sum()
    }

    fn wrote_seed_files(&self) -> bool {
        self.files
            .iter()
            .any(|m| m.path.file_name().is_some_and(|name| name == ITEMS_FILE))
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "DATA GENERATION SUMMARY")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Categories: {}", self.config.categories)?;
        writeln!(f, "Items: {}", self.config.items)?;
        writeln!(
            f,
            "Average items per category: {}",
            self.config.items_per_category()
        )?;
        writeln!(f, "Output directory: {}", self.config.output_dir.display())?;
        writeln!(f, "Fixtures directory: {}", self.config.fixtures_dir.display())?;
        writeln!(f)?;
        writeln!(f, "Files generated:")?;
        for metrics in &self.files {
            writeln!(
                f,
                "  - {} ({} rows, {} bytes)",
                metrics.path.display(),
                metrics.rows_written,
                metrics.file_size_bytes
            )?;
        }

        if self.wrote_seed_files() {
            let categories = self.config.output_dir.join(CATEGORIES_FILE);
            let items = self.config.output_dir.join(ITEMS_FILE);
            writeln!(f)?;
            writeln!(f, "To load data into PostgreSQL:")?;
            writeln!(
                f,
                "  psql -U postgres -h localhost -d benchmark -c \"\\COPY category FROM '{}' CSV HEADER\"",
                categories.display()
            )?;
            writeln!(
                f,
                "  psql -U postgres -h localhost -d benchmark -c \"\\COPY item FROM '{}' CSV HEADER\"",
                items.display()
            )?;
        }

        write!(f, "{RULE}")
    }
}
