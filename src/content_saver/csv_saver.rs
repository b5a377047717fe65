use log::debug;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::provider_extractor::{FlatOutputRecord, OUTPUT_COLUMNS};
use crate::scrape_engine::{ScrapeError, ScrapeResult};

/// Append-only destination for flat records
pub trait RecordSink {
    /// Persist one row; on return the row is durable as far as the sink goes
    fn write_record(&mut self, record: &FlatOutputRecord) -> ScrapeResult<()>;

    /// Flush anything still buffered
    fn finish(&mut self) -> ScrapeResult<()>;
}

/// CSV writer with the fixed output header
///
/// The header is written on creation, so an empty run still leaves a valid
/// table behind. Each row is flushed as soon as it is written.
pub struct CsvRecordWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CsvRecordWriter<File> {
    /// Create (or truncate) the CSV file at `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::OutputCreate`] if the file or its directory
    /// cannot be created, and [`ScrapeError::OutputWrite`] if the header
    /// cannot be written.
    pub fn create(path: &Path) -> ScrapeResult<Self> {
        let create_err = |source| ScrapeError::OutputCreate {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(create_err)?;
        }
        let file = File::create(path).map_err(create_err)?;

        debug!(target: "providerscrape::output", "Writing records to {}", path.display());
        Self::from_writer(file)
    }
}

impl<W: Write> CsvRecordWriter<W> {
    /// Wrap any writer and emit the header row
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::OutputWrite`] if the header cannot be written.
    pub fn from_writer(inner: W) -> ScrapeResult<Self> {
        // Header is written by hand so it exists even when no row follows.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(inner);
        writer.write_record(OUTPUT_COLUMNS)?;
        writer.flush().map_err(csv::Error::from)?;

        Ok(Self { writer, rows: 0 })
    }

    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::OutputWrite`] if the final flush fails.
    pub fn into_inner(self) -> ScrapeResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| ScrapeError::OutputWrite(csv::Error::from(e.into_error())))
    }
}

impl<W: Write> RecordSink for CsvRecordWriter<W> {
    fn write_record(&mut self, record: &FlatOutputRecord) -> ScrapeResult<()> {
        self.writer.serialize(record)?;
        self.writer.flush().map_err(csv::Error::from)?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> ScrapeResult<()> {
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
