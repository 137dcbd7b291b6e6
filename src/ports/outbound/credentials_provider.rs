use crate::shared::Result;
use crate::size_reporting::domain::AuthToken;

/// CredentialsProvider port for obtaining the registry bearer token
pub trait CredentialsProvider {
    /// Resolves the bearer token for the configured registry
    ///
    /// # Errors
    /// Returns `SizeReportError::CredentialsNotFound` if the credentials
    /// source is missing, unreadable, or has no token for the registry.
    /// Error messages must never contain the token itself.
    fn resolve_token(&self) -> Result<AuthToken>;
}
