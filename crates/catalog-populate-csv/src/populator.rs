//! CSV populator for the seed files.

use crate::error::CSVPopulatorError;
use catalog_core::CsvRecord;
use catalog_generator::CatalogGenerator;
use csv::WriterBuilder;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// File name of the category seed file.
pub const CATEGORIES_FILE: &str = "categories.csv";

/// File name of the item seed file.
pub const ITEMS_FILE: &str = "items.csv";

/// Metrics from writing one CSV file.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// File that was written.
    pub path: PathBuf,
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Stream `rows` into a new CSV file at `output_path`.
///
/// The header comes from [`CsvRecord::HEADERS`] and is written even when
/// `rows` is empty. Rows are pulled from the iterator one at a time, so
/// memory stays flat regardless of the row count. An existing file is
/// truncated; on error the partially written file is left in place.
pub fn write_csv<T, I, P>(output_path: P, rows: I) -> Result<PopulateMetrics, CSVPopulatorError>
where
    T: CsvRecord,
    I: IntoIterator<Item = T>,
    P: AsRef<Path>,
{
    let start_time = Instant::now();
    let output_path = output_path.as_ref();
    let mut metrics = PopulateMetrics {
        path: output_path.to_path_buf(),
        ..Default::default()
    };

    let file = File::create(output_path)?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(buf_writer);

    let mut generation_time = Duration::ZERO;
    let mut write_time = Duration::ZERO;

    let write_start = Instant::now();
    writer.write_record(T::HEADERS)?;
    write_time += write_start.elapsed();

    let mut rows = rows.into_iter();
    loop {
        let gen_start = Instant::now();
        let Some(row) = rows.next() else {
            break;
        };
        generation_time += gen_start.elapsed();

        let write_start = Instant::now();
        writer.serialize(&row)?;
        write_time += write_start.elapsed();

        metrics.rows_written += 1;

        if metrics.rows_written % 10000 == 0 {
            debug!("Written {} rows", metrics.rows_written);
        }
    }

    // Flush and close before reading the file size
    writer.flush()?;
    let inner = writer
        .into_inner()
        .map_err(|e| CSVPopulatorError::Io(std::io::Error::other(e.to_string())))?;
    drop(inner);

    metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
    metrics.total_duration = start_time.elapsed();
    metrics.generation_duration = generation_time;
    metrics.write_duration = write_time;

    Ok(metrics)
}

/// CSV populator that writes the category and item seed files.
pub struct CSVPopulator {
    generator: CatalogGenerator,
}

impl CSVPopulator {
    /// Create a new CSV populator drawing records from `generator`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let populator = CSVPopulator::new(CatalogGenerator::new(42));
    /// ```
    pub fn new(generator: CatalogGenerator) -> Self {
        Self { generator }
    }

    /// Get a mutable reference to the generator, e.g. to export fixtures
    /// from the same random stream.
    pub fn generator_mut(&mut self) -> &mut CatalogGenerator {
        &mut self.generator
    }

    /// Write `count` categories to `output_path`.
    ///
    /// The returned `rows_written` is the category count that item
    /// generation should be sized with.
    pub fn populate_categories<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let output_path = output_path.as_ref();
        info!(
            "Generating {} categories into '{}'",
            count,
            output_path.display()
        );

        let metrics = write_csv(output_path, self.generator.categories(count))?;

        info!(
            "Categories written: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write `item_count` items spread over `category_count` categories to
    /// `output_path`.
    pub fn populate_items<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        item_count: u64,
        category_count: u64,
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let output_path = output_path.as_ref();
        let per_category = if category_count == 0 {
            0
        } else {
            item_count / category_count
        };
        info!(
            "Generating {} items (~{} per category) into '{}'",
            item_count,
            per_category,
            output_path.display()
        );

        let metrics = write_csv(output_path, self.generator.items(item_count, category_count))?;

        info!(
            "Items written: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write `categories.csv` and `items.csv` into `output_dir`, creating
    /// the directory if needed.
    ///
    /// Categories are written first; their row count sizes the item
    /// distribution.
    pub fn populate_seed_files<P: AsRef<Path>>(
        &mut self,
        output_dir: P,
        category_count: u64,
        item_count: u64,
    ) -> Result<Vec<PopulateMetrics>, CSVPopulatorError> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        let categories =
            self.populate_categories(output_dir.join(CATEGORIES_FILE), category_count)?;
        let items = self.populate_items(
            output_dir.join(ITEMS_FILE),
            item_count,
            categories.rows_written,
        )?;

        Ok(vec![categories, items])
    }
}
