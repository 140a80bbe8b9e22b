//! Fixture files for the load-testing tool.
//!
//! Fixtures are id lists and sample request bodies. They only share id
//! ranges with the seed files; sample SKUs and codes use their own
//! prefixes and never collide with seeded rows.

use crate::error::CSVPopulatorError;
use crate::populator::{write_csv, PopulateMetrics};
use catalog_core::{CategoryIdRow, ItemIdRow, DEFAULT_DESCRIPTION_SENTENCES, DEFAULT_PAYLOAD_ROWS};
use catalog_generator::CatalogGenerator;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CATEGORY_IDS_FILE: &str = "category-ids.csv";
pub const ITEM_IDS_FILE: &str = "item-ids.csv";
pub const ITEM_PAYLOAD_LIGHT_FILE: &str = "item-payload-light.csv";
pub const ITEM_PAYLOAD_HEAVY_FILE: &str = "item-payload-heavy.csv";
pub const CATEGORY_PAYLOAD_FILE: &str = "category-payload.csv";

/// Writes the five fixture files into one directory.
pub struct FixtureExporter<'a> {
    generator: &'a mut CatalogGenerator,
    fixtures_dir: PathBuf,
    payload_rows: u64,
    description_sentences: usize,
}

impl<'a> FixtureExporter<'a> {
    /// Create an exporter writing into `fixtures_dir` with the default
    /// sample sizes.
    pub fn new(generator: &'a mut CatalogGenerator, fixtures_dir: impl Into<PathBuf>) -> Self {
        Self {
            generator,
            fixtures_dir: fixtures_dir.into(),
            payload_rows: DEFAULT_PAYLOAD_ROWS,
            description_sentences: DEFAULT_DESCRIPTION_SENTENCES,
        }
    }

    /// Set the number of rows in each payload file.
    pub fn with_payload_rows(mut self, payload_rows: u64) -> Self {
        self.payload_rows = payload_rows;
        self
    }

    /// Set the number of sentences in each heavy description.
    pub fn with_description_sentences(mut self, sentences: usize) -> Self {
        self.description_sentences = sentences;
        self
    }

    /// Get the fixtures directory.
    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }

    /// Write all fixture files, creating the directory if needed.
    pub fn export(
        &mut self,
        category_count: u64,
        item_count: u64,
    ) -> Result<Vec<PopulateMetrics>, CSVPopulatorError> {
        info!(
            "Generating load-test fixtures into '{}'",
            self.fixtures_dir.display()
        );
        std::fs::create_dir_all(&self.fixtures_dir)?;

        if category_count == 0 {
            warn!("No categories configured; item payload files will only contain headers");
        }

        let metrics = vec![
            self.write_category_ids(category_count)?,
            self.write_item_ids(item_count)?,
            self.write_item_payloads(category_count)?,
            self.write_heavy_item_payloads(category_count)?,
            self.write_category_payloads()?,
        ];

        info!(
            "Fixtures written: {} files, {} bytes",
            metrics.len(),
            metrics.iter().map(|m| m.file_size_bytes).sum::<u64>()
        );

        Ok(metrics)
    }

    /// Write `category-ids.csv` with ids `1..=category_count`.
    pub fn write_category_ids(
        &mut self,
        category_count: u64,
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let rows = (1..=category_count).map(|category_id| CategoryIdRow { category_id });
        write_csv(self.fixtures_dir.join(CATEGORY_IDS_FILE), rows)
    }

    /// Write `item-ids.csv` with ids `1..=item_count`.
    pub fn write_item_ids(&mut self, item_count: u64) -> Result<PopulateMetrics, CSVPopulatorError> {
        let rows = (1..=item_count).map(|item_id| ItemIdRow { item_id });
        write_csv(self.fixtures_dir.join(ITEM_IDS_FILE), rows)
    }

    /// Write `item-payload-light.csv`.
    pub fn write_item_payloads(
        &mut self,
        category_count: u64,
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let path = self.fixtures_dir.join(ITEM_PAYLOAD_LIGHT_FILE);
        let rows = self
            .generator
            .item_payloads(self.payload_rows, category_count);
        write_csv(path, rows)
    }

    /// Write `item-payload-heavy.csv`.
    pub fn write_heavy_item_payloads(
        &mut self,
        category_count: u64,
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let path = self.fixtures_dir.join(ITEM_PAYLOAD_HEAVY_FILE);
        let rows = self.generator.heavy_item_payloads(
            self.payload_rows,
            category_count,
            self.description_sentences,
        );
        write_csv(path, rows)
    }

    /// Write `category-payload.csv`.
    pub fn write_category_payloads(&mut self) -> Result<PopulateMetrics, CSVPopulatorError> {
        let path = self.fixtures_dir.join(CATEGORY_PAYLOAD_FILE);
        let rows = self.generator.category_payloads(self.payload_rows);
        write_csv(path, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    fn read_records(path: &Path) -> Vec<csv::StringRecord> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        reader.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_export_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let fixtures_dir = temp_dir.path().join("jmeter").join("data");
        let mut generator = CatalogGenerator::new(42);

        let metrics = FixtureExporter::new(&mut generator, &fixtures_dir)
            .with_payload_rows(10)
            .export(5, 12)
            .unwrap();

        let rows: Vec<u64> = metrics.iter().map(|m| m.rows_written).collect();
        assert_eq!(rows, vec![5, 12, 10, 10, 10]);

        for file in [
            CATEGORY_IDS_FILE,
            ITEM_IDS_FILE,
            ITEM_PAYLOAD_LIGHT_FILE,
            ITEM_PAYLOAD_HEAVY_FILE,
            CATEGORY_PAYLOAD_FILE,
        ] {
            assert!(fixtures_dir.join(file).exists(), "{file} missing");
        }
    }

    #[test]
    fn test_id_lists() {
        let temp_dir = TempDir::new().unwrap();
        let mut generator = CatalogGenerator::new(42);
        let mut exporter = FixtureExporter::new(&mut generator, temp_dir.path());

        exporter.write_category_ids(3).unwrap();
        exporter.write_item_ids(4).unwrap();

        assert_eq!(
            read_lines(&temp_dir.path().join(CATEGORY_IDS_FILE)),
            vec!["categoryId", "1", "2", "3"]
        );
        assert_eq!(
            read_lines(&temp_dir.path().join(ITEM_IDS_FILE)),
            vec!["itemId", "1", "2", "3", "4"]
        );
    }

    #[test]
    fn test_light_payloads() {
        let temp_dir = TempDir::new().unwrap();
        let mut generator = CatalogGenerator::new(42);
        let mut exporter =
            FixtureExporter::new(&mut generator, temp_dir.path()).with_payload_rows(50);

        exporter.write_item_payloads(7).unwrap();

        let path = temp_dir.path().join(ITEM_PAYLOAD_LIGHT_FILE);
        assert_eq!(read_lines(&path)[0], "sku,name,price,stock,categoryId");

        let records = read_records(&path);
        assert_eq!(records.len(), 50);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(&record[0], format!("JMETER{i:06}"));
            let price: f64 = record[2].parse().unwrap();
            assert!((9.99..=999.99).contains(&price));
            let stock: u32 = record[3].parse().unwrap();
            assert!(stock <= 1000);
            let category_id: u64 = record[4].parse().unwrap();
            assert!((1..=7).contains(&category_id));
        }
    }

    #[test]
    fn test_heavy_payloads() {
        let temp_dir = TempDir::new().unwrap();
        let mut generator = CatalogGenerator::new(42);
        let mut exporter =
            FixtureExporter::new(&mut generator, temp_dir.path()).with_payload_rows(5);

        exporter.write_item_payloads(3).unwrap();
        let heavy = exporter.write_heavy_item_payloads(3).unwrap();
        let light_size = std::fs::metadata(temp_dir.path().join(ITEM_PAYLOAD_LIGHT_FILE))
            .unwrap()
            .len();

        let path = temp_dir.path().join(ITEM_PAYLOAD_HEAVY_FILE);
        assert_eq!(
            read_lines(&path)[0],
            "sku,name,price,stock,categoryId,description"
        );

        let records = read_records(&path);
        assert_eq!(records.len(), 5);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(&record[0], format!("JMHEAVY{i:06}"));
            // Description contains commas, so it must survive quoting intact
            assert!(record[5].len() > 5000);
            assert!(record[5].starts_with("Lorem ipsum dolor sit amet, consectetur"));
        }

        assert!(heavy.file_size_bytes > light_size * 20);
    }

    #[test]
    fn test_short_descriptions() {
        let temp_dir = TempDir::new().unwrap();
        let mut generator = CatalogGenerator::new(42);
        let mut exporter = FixtureExporter::new(&mut generator, temp_dir.path())
            .with_payload_rows(2)
            .with_description_sentences(1);

        exporter.write_heavy_item_payloads(3).unwrap();

        let records = read_records(&temp_dir.path().join(ITEM_PAYLOAD_HEAVY_FILE));
        assert!(records.iter().all(|record| record[5].len() < 100));
    }

    #[test]
    fn test_category_payloads() {
        let temp_dir = TempDir::new().unwrap();
        let mut generator = CatalogGenerator::new(42);
        let mut exporter =
            FixtureExporter::new(&mut generator, temp_dir.path()).with_payload_rows(3);

        exporter.write_category_payloads().unwrap();

        let path = temp_dir.path().join(CATEGORY_PAYLOAD_FILE);
        let lines = read_lines(&path);
        assert_eq!(lines[0], "code,name");
        assert_eq!(lines[3], "JMCAT0002,Furniture");

        let records = read_records(&path);
        assert_eq!(&records[0][0], "JMCAT0000");
        assert!(records[0][1].starts_with("Electronics - "));
        assert!(records[1][1].ends_with(" Tools"));
    }

    #[test]
    fn test_payloads_without_categories() {
        let temp_dir = TempDir::new().unwrap();
        let mut generator = CatalogGenerator::new(42);

        let metrics = FixtureExporter::new(&mut generator, temp_dir.path())
            .with_payload_rows(10)
            .export(0, 0)
            .unwrap();

        let rows: Vec<u64> = metrics.iter().map(|m| m.rows_written).collect();
        assert_eq!(rows, vec![0, 0, 0, 0, 10]);
        assert_eq!(
            read_lines(&temp_dir.path().join(CATEGORY_IDS_FILE)),
            vec!["categoryId"]
        );
    }
}
