use crate::application::dto::{SizeReportRequest, SizeReportResponse};
use crate::ports::outbound::{CredentialsProvider, ProgressReporter, RegistryRepository};
use crate::shared::error::SizeReportError;
use crate::shared::Result;
use crate::size_reporting::domain::{
    AuthToken, DroppedPackage, FetchOutcome, PackageInfo, PackageName,
};
use crate::size_reporting::services::SizeRanker;
use futures::stream::{self, StreamExt};

/// ReportPackageSizesUseCase - Core use case for the org size report
///
/// Resolves credentials, lists the organization's packages, looks up every
/// package's latest unpacked size with bounded concurrency, and ranks the
/// results. Presenting the ranked list is left to the caller.
///
/// # Type Parameters
/// * `CP` - CredentialsProvider implementation
/// * `RR` - RegistryRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ReportPackageSizesUseCase<CP, RR, PR> {
    credentials_provider: CP,
    registry: RR,
    progress_reporter: PR,
}

impl<CP, RR, PR> ReportPackageSizesUseCase<CP, RR, PR>
where
    CP: CredentialsProvider,
    RR: RegistryRepository,
    PR: ProgressReporter,
{
    /// Creates a new ReportPackageSizesUseCase with injected dependencies
    pub fn new(credentials_provider: CP, registry: RR, progress_reporter: PR) -> Self {
        Self {
            credentials_provider,
            registry,
            progress_reporter,
        }
    }

    /// Executes the size report use case
    ///
    /// # Errors
    /// - `CredentialsNotFound` before any request is sent
    /// - `OrgFetchFailed` if the package list cannot be fetched
    /// - `OrgEmpty` if the organization has no packages
    /// - `NoSizesRetrieved` if no package size could be resolved
    pub async fn execute(&self, request: SizeReportRequest) -> Result<SizeReportResponse> {
        // Step 1: Credentials (no network access before this succeeds)
        let token = self.credentials_provider.resolve_token()?;

        // Step 2: List the organization's packages
        let package_names = self.list_packages(&request, &token).await?;
        let attempted = package_names.len();

        // Step 3: Fetch every package size
        let (resolved, dropped) = self
            .fetch_sizes(package_names, &token, request.concurrency)
            .await;

        if resolved.is_empty() {
            return Err(SizeReportError::NoSizesRetrieved {
                org: request.org.to_string(),
                attempted,
            }
            .into());
        }

        // Step 4: Rank largest first
        let packages = SizeRanker::rank(resolved);

        Ok(SizeReportResponse::new(
            request.org,
            packages,
            attempted,
            dropped,
        ))
    }

    async fn list_packages(
        &self,
        request: &SizeReportRequest,
        token: &AuthToken,
    ) -> Result<Vec<String>> {
        self.progress_reporter.report(&format!(
            "🔍 Fetching package list for org {}...",
            request.org
        ));

        let packages = self.registry.list_org_packages(&request.org, token).await?;

        if packages.is_empty() {
            return Err(SizeReportError::OrgEmpty {
                org: request.org.to_string(),
            }
            .into());
        }

        self.progress_reporter
            .report(&format!("✅ Found {} package(s)", packages.len()));

        Ok(packages.into_iter().collect())
    }

    /// Looks up all package sizes, at most `concurrency` at a time
    ///
    /// Returns once every lookup has either emitted a size or been dropped.
    /// Drops are reported as warnings and never fail the run.
    async fn fetch_sizes(
        &self,
        package_names: Vec<String>,
        token: &AuthToken,
        concurrency: usize,
    ) -> (Vec<PackageInfo>, Vec<DroppedPackage>) {
        let total = package_names.len();
        self.progress_reporter
            .report("📦 Fetching latest unpacked sizes...");

        let registry = &self.registry;
        let mut outcomes = stream::iter(package_names)
            .map(move |name| Self::fetch_one(registry, token, name))
            .buffer_unordered(concurrency.max(1));

        let mut resolved = Vec::with_capacity(total);
        let mut dropped = Vec::new();
        let mut completed = 0;

        while let Some(outcome) = outcomes.next().await {
            completed += 1;
            match outcome {
                FetchOutcome::Emitted(info) => {
                    self.progress_reporter
                        .report_progress(completed, total, Some(info.name()));
                    resolved.push(info);
                }
                FetchOutcome::Dropped(package) => {
                    self.progress_reporter
                        .report_progress(completed, total, Some(package.name.as_str()));
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping {}: {}",
                        package.name, package.reason
                    ));
                    dropped.push(package);
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Size lookup complete: {} succeeded out of {}, {} failed",
            resolved.len(),
            total,
            dropped.len()
        ));

        (resolved, dropped)
    }

    async fn fetch_one(registry: &RR, token: &AuthToken, name: String) -> FetchOutcome {
        let package = match PackageName::new(name.clone()) {
            Ok(package) => package,
            Err(e) => {
                return FetchOutcome::Dropped(DroppedPackage {
                    name,
                    reason: e.to_string(),
                })
            }
        };

        match registry.fetch_latest_unpacked_size(&package, token).await {
            Ok(bytes) => FetchOutcome::Emitted(PackageInfo::new(package, bytes)),
            Err(e) => FetchOutcome::Dropped(DroppedPackage {
                name,
                reason: e.to_string(),
            }),
        }
    }
}
