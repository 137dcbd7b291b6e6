/// Mock implementations for testing
mod mock_credentials_provider;
mod mock_progress_reporter;

pub use mock_credentials_provider::MockCredentialsProvider;
pub use mock_progress_reporter::MockProgressReporter;
