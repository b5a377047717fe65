//! Output table writing for scraped provider records

// Module declarations
mod csv_saver;

// Re-export public API from csv_saver module
pub use csv_saver::{CsvRecordWriter, RecordSink};
