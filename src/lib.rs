//! npm-org-sizes - package size reporting for npm organizations
//!
//! This library lists every package of an npm organization, looks up the
//! unpacked size of each package's latest version, and ranks the results
//! largest first. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`size_reporting`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_org_sizes::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let registry_url = reqwest::Url::parse(DEFAULT_REGISTRY)?;
//!
//! // Create adapters
//! let credentials = NpmrcReader::new(NpmrcReader::default_path()?, registry_url.clone());
//! let registry = NpmRegistryClient::new(registry_url, Duration::from_secs(30))?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ReportPackageSizesUseCase::new(credentials, registry, progress_reporter);
//!
//! // Execute
//! let request = SizeReportRequest::new(OrgName::new("my-org")?, DEFAULT_CONCURRENCY)?;
//! let response = use_case.execute(request).await?;
//!
//! // Present
//! ConsoleTablePresenter::new().present(&response.packages)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod size_reporting;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleTablePresenter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        CsvReportWriter, NpmrcReader, CSV_HEADER, DEFAULT_CSV_PATH,
    };
    pub use crate::adapters::outbound::network::{NpmRegistryClient, DEFAULT_REGISTRY};
    pub use crate::application::dto::{SizeReportRequest, SizeReportResponse, DEFAULT_CONCURRENCY};
    pub use crate::application::factories::{PresenterFactory, PresenterType};
    pub use crate::application::use_cases::ReportPackageSizesUseCase;
    pub use crate::ports::outbound::{
        CredentialsProvider, OrgPackageSet, ProgressReporter, RegistryRepository,
        ReportPresenter,
    };
    pub use crate::shared::error::{ExitCode, SizeReportError};
    pub use crate::shared::Result;
    pub use crate::size_reporting::domain::{
        AuthToken, ByteSize, DroppedPackage, FetchOutcome, OrgName, PackageInfo, PackageName,
    };
    pub use crate::size_reporting::services::SizeRanker;
}
