/// Use cases module containing application business logic orchestration
mod report_package_sizes;

pub use report_package_sizes::ReportPackageSizesUseCase;
