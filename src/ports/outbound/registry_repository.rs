use crate::shared::Result;
use crate::size_reporting::domain::{AuthToken, OrgName, PackageName};
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Package names owned by an organization, as returned by the registry
pub type OrgPackageSet = BTreeSet<String>;

/// RegistryRepository port for querying the package registry
///
/// All methods are async so package lookups can run concurrently.
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait RegistryRepository: Send + Sync {
    /// Lists every package name owned by an organization
    ///
    /// # Errors
    /// Returns `SizeReportError::OrgFetchFailed` on transport errors,
    /// non-success status codes, or a malformed response body
    async fn list_org_packages(&self, org: &OrgName, token: &AuthToken) -> Result<OrgPackageSet>;

    /// Fetches the unpacked size, in bytes, of the package's `latest` version
    ///
    /// # Errors
    /// Returns an error if the request fails, the document cannot be parsed,
    /// or the latest version or its size is missing
    async fn fetch_latest_unpacked_size(
        &self,
        package: &PackageName,
        token: &AuthToken,
    ) -> Result<u64>;
}
