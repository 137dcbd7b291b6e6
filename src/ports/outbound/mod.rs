/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod credentials_provider;
pub mod progress_reporter;
pub mod registry_repository;
pub mod report_presenter;

pub use credentials_provider::CredentialsProvider;
pub use progress_reporter::ProgressReporter;
pub use registry_repository::{OrgPackageSet, RegistryRepository};
pub use report_presenter::ReportPresenter;
