use crate::ports::outbound::{OrgPackageSet, RegistryRepository};
use crate::shared::error::SizeReportError;
use crate::shared::Result;
use crate::size_reporting::domain::{AuthToken, OrgName, PackageName};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Url;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Public npm registry
pub const DEFAULT_REGISTRY: &str = "https://registry.npmjs.org/";

/// Subset of a registry package document (packument) needed for size lookups
#[derive(Debug, Deserialize)]
struct Packument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: DistTags,
    #[serde(default)]
    versions: HashMap<String, VersionRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct DistTags {
    #[serde(default)]
    latest: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VersionRecord {
    #[serde(default)]
    dist: Option<Dist>,
}

#[derive(Debug, Deserialize)]
struct Dist {
    #[serde(rename = "unpackedSize", default)]
    unpacked_size: Option<u64>,
}

impl Packument {
    fn latest_unpacked_size(&self, package: &PackageName) -> Result<u64> {
        let latest = self
            .dist_tags
            .latest
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No latest dist-tag for {}", package))?;

        let version = self
            .versions
            .get(latest)
            .ok_or_else(|| anyhow::anyhow!("Latest version {} not found for {}", latest, package))?;

        version
            .dist
            .as_ref()
            .and_then(|dist| dist.unpacked_size)
            .ok_or_else(|| {
                anyhow::anyhow!("No unpackedSize recorded for {}@{}", package, latest)
            })
    }
}

/// NpmRegistryClient adapter for the npm registry HTTP API
///
/// Implements the RegistryRepository port with an async reqwest client.
/// Every request carries the bearer token and is bounded by the configured
/// timeout.
pub struct NpmRegistryClient {
    client: reqwest::Client,
    registry: Url,
}

impl NpmRegistryClient {
    /// Creates a client for `registry` with a per-request timeout
    pub fn new(registry: Url, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("npm-org-sizes/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, registry })
    }

    fn org_packages_url(&self, org: &OrgName) -> Result<Url> {
        let encoded = urlencoding::encode(org.as_str());
        Ok(self.registry.join(&format!("-/org/{}/package", encoded))?)
    }

    fn packument_url(&self, package: &PackageName) -> Result<Url> {
        Ok(self.registry.join(&package.url_path_segment())?)
    }

    async fn fetch_org_packages(&self, org: &OrgName, token: &AuthToken) -> Result<OrgPackageSet> {
        let url = self.org_packages_url(org)?;
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, token.bearer_header())
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Registry returned status code {}", response.status());
        }

        let packages: BTreeMap<String, serde_json::Value> = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to decode package list: {}", e))?;

        Ok(packages.into_keys().collect())
    }
}

#[async_trait]
impl RegistryRepository for NpmRegistryClient {
    async fn list_org_packages(&self, org: &OrgName, token: &AuthToken) -> Result<OrgPackageSet> {
        self.fetch_org_packages(org, token).await.map_err(|e| {
            SizeReportError::OrgFetchFailed {
                org: org.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    async fn fetch_latest_unpacked_size(
        &self,
        package: &PackageName,
        token: &AuthToken,
    ) -> Result<u64> {
        let url = self.packument_url(package)?;
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, token.bearer_header())
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch {}: {}", package, e))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Package {} not found (status: {})", package, status.as_u16());
        }

        let packument: Packument = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to decode response for {}: {}", package, e))?;

        packument.latest_unpacked_size(package)
    }
}
