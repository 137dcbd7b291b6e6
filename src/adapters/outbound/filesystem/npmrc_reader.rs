use crate::ports::outbound::CredentialsProvider;
use crate::shared::error::SizeReportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_CREDENTIALS_FILE_SIZE};
use crate::shared::Result;
use crate::size_reporting::domain::AuthToken;
use reqwest::Url;
use std::fs;
use std::path::PathBuf;

const NPMRC_FILENAME: &str = ".npmrc";

/// NpmrcReader adapter for reading the registry token from an `.npmrc` file
///
/// Looks for a line of the form `//<host>[:port]/<path>:_authToken=<token>`
/// matching the configured registry, e.g.
/// `//registry.npmjs.org/:_authToken=npm_xxx` for the public registry.
pub struct NpmrcReader {
    npmrc_path: PathBuf,
    registry: Url,
}

impl NpmrcReader {
    pub fn new(npmrc_path: PathBuf, registry: Url) -> Self {
        Self {
            npmrc_path,
            registry,
        }
    }

    /// Default credentials location: `$HOME/.npmrc`
    pub fn default_path() -> Result<PathBuf> {
        match std::env::var_os("HOME") {
            Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(NPMRC_FILENAME)),
            _ => Err(SizeReportError::CredentialsNotFound {
                path: PathBuf::from("~").join(NPMRC_FILENAME),
                reason: "HOME environment variable is not set".to_string(),
            }
            .into()),
        }
    }

    /// Line prefix that carries the token for this registry
    fn token_line_prefix(&self) -> String {
        let host = self.registry.host_str().unwrap_or_default();
        let port = self
            .registry
            .port()
            .map(|p| format!(":{}", p))
            .unwrap_or_default();
        format!("//{}{}{}:_authToken=", host, port, self.registry.path())
    }

    fn not_found(&self, reason: impl Into<String>) -> anyhow::Error {
        SizeReportError::CredentialsNotFound {
            path: self.npmrc_path.clone(),
            reason: reason.into(),
        }
        .into()
    }

    fn read_npmrc(&self) -> Result<String> {
        let size = validate_regular_file(&self.npmrc_path, NPMRC_FILENAME)
            .map_err(|e| self.not_found(e.to_string()))?;
        validate_file_size(size, &self.npmrc_path, MAX_CREDENTIALS_FILE_SIZE)
            .map_err(|e| self.not_found(e.to_string()))?;

        fs::read_to_string(&self.npmrc_path)
            .map_err(|e| self.not_found(format!("Failed to read {}: {}", NPMRC_FILENAME, e)))
    }
}

impl CredentialsProvider for NpmrcReader {
    fn resolve_token(&self) -> Result<AuthToken> {
        let content = self.read_npmrc()?;
        let prefix = self.token_line_prefix();

        let token = content
            .lines()
            .find_map(|line| line.strip_prefix(prefix.as_str()))
            .map(str::trim_end)
            .ok_or_else(|| self.not_found(format!("No line starting with {}", prefix)))?;

        if token.is_empty() {
            return Err(self.not_found(format!("Empty auth token after {}", prefix)));
        }

        Ok(AuthToken::new(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn npm_registry() -> Url {
        Url::parse("https://registry.npmjs.org/").unwrap()
    }

    fn write_npmrc(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(".npmrc");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_resolve_token_from_npmrc() {
        let dir = TempDir::new().unwrap();
        let path = write_npmrc(
            &dir,
            "registry=https://registry.npmjs.org/\n//registry.npmjs.org/:_authToken=npm_abc123\n",
        );

        let reader = NpmrcReader::new(path, npm_registry());
        let token = reader.resolve_token().unwrap();
        assert_eq!(token.expose(), "npm_abc123");
    }

    #[test]
    fn test_resolve_token_handles_crlf() {
        let dir = TempDir::new().unwrap();
        let path = write_npmrc(&dir, "//registry.npmjs.org/:_authToken=npm_abc123\r\n");

        let reader = NpmrcReader::new(path, npm_registry());
        assert_eq!(reader.resolve_token().unwrap().expose(), "npm_abc123");
    }

    #[test]
    fn test_resolve_token_uses_first_matching_line() {
        let dir = TempDir::new().unwrap();
        let path = write_npmrc(
            &dir,
            "//registry.npmjs.org/:_authToken=first\n//registry.npmjs.org/:_authToken=second\n",
        );

        let reader = NpmrcReader::new(path, npm_registry());
        assert_eq!(reader.resolve_token().unwrap().expose(), "first");
    }

    #[test]
    fn test_resolve_token_matches_custom_registry_with_port() {
        let dir = TempDir::new().unwrap();
        let path = write_npmrc(
            &dir,
            "//registry.npmjs.org/:_authToken=public\n//127.0.0.1:4873/:_authToken=local\n",
        );

        let reader = NpmrcReader::new(path, Url::parse("http://127.0.0.1:4873/").unwrap());
        assert_eq!(reader.resolve_token().unwrap().expose(), "local");
    }

    #[test]
    fn test_resolve_token_missing_line() {
        let dir = TempDir::new().unwrap();
        let path = write_npmrc(&dir, "registry=https://registry.npmjs.org/\n");

        let reader = NpmrcReader::new(path, npm_registry());
        let err = reader.resolve_token().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("npm auth token not found"));
        assert!(message.contains("//registry.npmjs.org/:_authToken="));
    }

    #[test]
    fn test_resolve_token_empty_value() {
        let dir = TempDir::new().unwrap();
        let path = write_npmrc(&dir, "//registry.npmjs.org/:_authToken=\n");

        let reader = NpmrcReader::new(path, npm_registry());
        let err = reader.resolve_token().unwrap_err();
        assert!(err.to_string().contains("Empty auth token"));
    }

    #[test]
    fn test_resolve_token_missing_file() {
        let dir = TempDir::new().unwrap();
        let reader = NpmrcReader::new(dir.path().join(".npmrc"), npm_registry());

        let err = reader.resolve_token().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SizeReportError>(),
            Some(SizeReportError::CredentialsNotFound { .. })
        ));
    }

    #[test]
    fn test_error_never_contains_other_tokens() {
        let dir = TempDir::new().unwrap();
        let path = write_npmrc(&dir, "//other.example.com/:_authToken=do-not-leak\n");

        let reader = NpmrcReader::new(path, npm_registry());
        let err = reader.resolve_token().unwrap_err();
        assert!(!err.to_string().contains("do-not-leak"));
    }

    #[test]
    fn test_token_line_prefix_default_registry() {
        let reader = NpmrcReader::new(PathBuf::from(".npmrc"), npm_registry());
        assert_eq!(reader.token_line_prefix(), "//registry.npmjs.org/:_authToken=");
    }
}
