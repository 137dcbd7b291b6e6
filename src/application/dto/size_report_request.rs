use crate::shared::error::SizeReportError;
use crate::shared::Result;
use crate::size_reporting::domain::OrgName;

/// Default number of package lookups in flight at once
pub const DEFAULT_CONCURRENCY: usize = 16;

/// SizeReportRequest - Internal request DTO for the size report use case
#[derive(Debug, Clone)]
pub struct SizeReportRequest {
    /// Organization whose packages are measured
    pub org: OrgName,
    /// Maximum number of concurrent package lookups (always >= 1)
    pub concurrency: usize,
}

impl SizeReportRequest {
    pub fn new(org: OrgName, concurrency: usize) -> Result<Self> {
        if concurrency == 0 {
            return Err(SizeReportError::Validation {
                message: "concurrency must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self { org, concurrency })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request() {
        let request = SizeReportRequest::new(OrgName::new("acme").unwrap(), 4).unwrap();
        assert_eq!(request.org.as_str(), "acme");
        assert_eq!(request.concurrency, 4);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let result = SizeReportRequest::new(OrgName::new("acme").unwrap(), 0);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("concurrency must be at least 1"));
    }
}
