use crate::size_reporting::domain::{DroppedPackage, OrgName, PackageInfo};

/// SizeReportResponse - Internal response DTO from the size report use case
#[derive(Debug, Clone)]
pub struct SizeReportResponse {
    /// Organization the report covers
    pub org: OrgName,
    /// Resolved packages, largest first, ties by name
    pub packages: Vec<PackageInfo>,
    /// Number of package names the organization listed
    pub attempted: usize,
    /// Packages whose size could not be resolved
    pub dropped: Vec<DroppedPackage>,
}

impl SizeReportResponse {
    pub fn new(
        org: OrgName,
        packages: Vec<PackageInfo>,
        attempted: usize,
        dropped: Vec<DroppedPackage>,
    ) -> Self {
        Self {
            org,
            packages,
            attempted,
            dropped,
        }
    }
}
