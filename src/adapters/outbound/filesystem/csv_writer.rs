use crate::ports::outbound::ReportPresenter;
use crate::shared::error::SizeReportError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use crate::size_reporting::domain::PackageInfo;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default report location, relative to the working directory
pub const DEFAULT_CSV_PATH: &str = "package-sizes.csv";

/// Header row of the size report
pub const CSV_HEADER: [&str; 3] = ["Package Name", "Size (Bytes)", "Size (Pretty)"];

/// CsvReportWriter adapter for writing the size report as CSV
///
/// The report is written to a temporary file next to the target and then
/// renamed over it, so readers see either the previous report or the new
/// one, never a partial file.
pub struct CsvReportWriter {
    output_path: PathBuf,
}

impl CsvReportWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_failed(&self, details: impl Into<String>) -> anyhow::Error {
        SizeReportError::WriteFailed {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    fn parent_directory(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    }

    fn validate_destination(&self) -> Result<()> {
        let parent = self.parent_directory();
        if !parent.is_dir() {
            return Err(self.write_failed(format!(
                "Parent directory does not exist: {}",
                parent.display()
            )));
        }

        validate_not_symlink(&self.output_path).map_err(|e| self.write_failed(e.to_string()))
    }

    fn write_rows(&self, packages: &[PackageInfo]) -> std::result::Result<NamedTempFile, String> {
        let temp = NamedTempFile::new_in(self.parent_directory()).map_err(|e| e.to_string())?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(temp);

        writer.write_record(CSV_HEADER).map_err(|e| e.to_string())?;
        for package in packages {
            let raw = package.raw_size_bytes().to_string();
            writer
                .write_record([package.name(), raw.as_str(), package.pretty_size()])
                .map_err(|e| e.to_string())?;
        }

        writer.into_inner().map_err(|e| e.error().to_string())
    }
}

impl ReportPresenter for CsvReportWriter {
    fn present(&self, packages: &[PackageInfo]) -> Result<()> {
        self.validate_destination()?;

        let temp = self
            .write_rows(packages)
            .map_err(|details| self.write_failed(details))?;

        // NamedTempFile defaults to 0600
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))
                .map_err(|e| self.write_failed(e.to_string()))?;
        }

        temp.persist(&self.output_path)
            .map_err(|e| self.write_failed(e.error.to_string()))?;

        Ok(())
    }
}
