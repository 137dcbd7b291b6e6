use crate::shared::Result;
use crate::size_reporting::domain::PackageInfo;

/// ReportPresenter port for presenting the ranked size report
///
/// Implementations must preserve the order of `packages`.
pub trait ReportPresenter {
    /// Presents the ranked packages to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, packages: &[PackageInfo]) -> Result<()>;
}
