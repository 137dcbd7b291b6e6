use crate::adapters::outbound::console::ConsoleTablePresenter;
use crate::adapters::outbound::filesystem::CsvReportWriter;
use crate::ports::outbound::ReportPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Csv(PathBuf),
    ConsoleTable,
}

/// Factory for creating report presenters
///
/// Selects the infrastructure adapter for each report destination.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use npm_org_sizes::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::ConsoleTable);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn ReportPresenter> {
        match presenter_type {
            PresenterType::Csv(path) => Box::new(CsvReportWriter::new(path)),
            PresenterType::ConsoleTable => Box::new(ConsoleTablePresenter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size_reporting::domain::{PackageInfo, PackageName};
    use tempfile::TempDir;

    #[test]
    fn test_create_csv_presenter_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sizes.csv");
        let presenter = PresenterFactory::create(PresenterType::Csv(path.clone()));

        let packages = vec![PackageInfo::new(PackageName::new("pkg").unwrap(), 2048)];
        presenter.present(&packages).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.ends_with("pkg,2048,2.00 KB\n"));
    }

    #[test]
    fn test_create_console_presenter() {
        let presenter = PresenterFactory::create(PresenterType::ConsoleTable);
        assert!(presenter.present(&[]).is_ok());
    }

    #[test]
    fn test_presenter_type_equality() {
        let csv1 = PresenterType::Csv(PathBuf::from("a.csv"));
        let csv2 = PresenterType::Csv(PathBuf::from("a.csv"));
        assert_eq!(csv1, csv2);
        assert_ne!(csv1, PresenterType::ConsoleTable);
    }
}
