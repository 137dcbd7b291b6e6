use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report written successfully
    Success = 0,
    /// Credentials, registry, aggregation or output failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Terminal errors of a size-report run.
///
/// Per-package fetch failures are never represented here; they are reported
/// as warnings and the package is left out of the report.
#[derive(Debug, Error)]
pub enum SizeReportError {
    #[error("npm auth token not found: {path}\nReason: {reason}\n\n💡 Hint: Run `npm login` or add a `//<registry-host>/:_authToken=<token>` line to your .npmrc")]
    CredentialsNotFound { path: PathBuf, reason: String },

    #[error("Failed to fetch packages for org {org}\nDetails: {details}\n\n💡 Hint: Check the organization name, your network connection and that your token can read the org")]
    OrgFetchFailed { org: String, details: String },

    #[error("No packages found for org {org}\n\n💡 Hint: The organization exists but owns no packages visible to your token")]
    OrgEmpty { org: String },

    #[error("No package sizes retrieved for org {org} ({attempted} package(s) attempted)\n\n💡 Hint: Every package lookup failed; see the warnings above for the individual causes")]
    NoSizesRetrieved { org: String, attempted: usize },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    WriteFailed { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },

    /// Validation error for value objects
    #[error("Validation error: {message}")]
    Validation { message: String },
}
