/// Filesystem adapters for credentials and report files
mod csv_writer;
mod npmrc_reader;

pub use csv_writer::{CsvReportWriter, CSV_HEADER, DEFAULT_CSV_PATH};
pub use npmrc_reader::NpmrcReader;
