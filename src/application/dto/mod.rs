/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI wiring and the use case,
/// keeping the domain layer isolated.
mod size_report_request;
mod size_report_response;

pub use size_report_request::{SizeReportRequest, DEFAULT_CONCURRENCY};
pub use size_report_response::SizeReportResponse;
