use crate::size_reporting::domain::PackageInfo;
use std::cmp::Reverse;
use std::collections::HashSet;

/// SizeRanker - Orders resolved packages for reporting
///
/// Packages are sorted by raw size, largest first. Equal sizes are ordered by
/// package name ascending so that repeated runs produce identical reports.
/// If the same name appears more than once only the first entry after sorting
/// is kept.
pub struct SizeRanker;

impl SizeRanker {
    pub fn rank(mut packages: Vec<PackageInfo>) -> Vec<PackageInfo> {
        packages.sort_by(|a, b| {
            Reverse(a.raw_size_bytes())
                .cmp(&Reverse(b.raw_size_bytes()))
                .then_with(|| a.package_name().cmp(b.package_name()))
        });

        let mut seen = HashSet::new();
        packages.retain(|package| seen.insert(package.package_name().clone()));
        packages
    }
}
