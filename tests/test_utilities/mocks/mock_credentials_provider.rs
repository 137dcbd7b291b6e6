use npm_org_sizes::prelude::*;
use std::path::PathBuf;

/// Mock CredentialsProvider returning a fixed token, or a lookup failure
pub struct MockCredentialsProvider {
    token: Option<String>,
}

impl MockCredentialsProvider {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { token: None }
    }
}

impl CredentialsProvider for MockCredentialsProvider {
    fn resolve_token(&self) -> Result<AuthToken> {
        match &self.token {
            Some(token) => Ok(AuthToken::new(token.as_str())),
            None => Err(SizeReportError::CredentialsNotFound {
                path: PathBuf::from("/home/test/.npmrc"),
                reason: "File does not exist".to_string(),
            }
            .into()),
        }
    }
}
