use crate::shared::error::SizeReportError;
use crate::shared::Result;

/// Maximum length npm accepts for package and scope names
const MAX_NAME_LENGTH: usize = 214;

fn is_org_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Package and scope segments accept legacy punctuation; the segment is
/// percent-encoded before it reaches a URL.
fn is_package_char(c: char) -> bool {
    c != '/' && !c.is_control() && !c.is_whitespace()
}

/// `.` and `..` would resolve as URL dot-segments; npm forbids a leading dot
fn starts_with_dot(segment: &str) -> bool {
    segment.starts_with('.')
}

fn validation_error(message: String) -> anyhow::Error {
    SizeReportError::Validation { message }.into()
}

/// NewType wrapper for an npm organization (scope) name
///
/// A leading `@` is accepted and stripped, so `@acme` and `acme` name the
/// same organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrgName(String);

impl OrgName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let name = name.strip_prefix('@').unwrap_or(&name).to_string();

        if name.is_empty() {
            return Err(validation_error(
                "Organization name cannot be empty".to_string(),
            ));
        }

        if name.len() > MAX_NAME_LENGTH {
            return Err(validation_error(format!(
                "Organization name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_NAME_LENGTH
            )));
        }

        // Security: the name is interpolated into a URL path
        if !name.chars().all(is_org_char) {
            return Err(validation_error(format!(
                "Organization name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores and dots are allowed.",
                name
            )));
        }

        if starts_with_dot(&name) {
            return Err(validation_error(format!(
                "Organization name '{}' cannot start with a dot",
                name
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrgName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for an npm package name, scoped (`@scope/name`) or not
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(validation_error("Package name cannot be empty".to_string()));
        }

        if name.len() > MAX_NAME_LENGTH {
            return Err(validation_error(format!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_NAME_LENGTH
            )));
        }

        let bare = match name.strip_prefix('@') {
            Some(scoped) => match scoped.split_once('/') {
                Some((scope, bare)) if !scope.is_empty() && scope.chars().all(is_package_char) => {
                    if starts_with_dot(scope) {
                        return Err(validation_error(format!(
                            "Package scope in '{}' cannot start with a dot",
                            name
                        )));
                    }
                    bare
                }
                _ => {
                    return Err(validation_error(format!(
                        "Scoped package name '{}' must have the form @scope/name",
                        name
                    )))
                }
            },
            None => name.as_str(),
        };

        if bare.is_empty() || !bare.chars().all(is_package_char) {
            return Err(validation_error(format!(
                "Package name '{}' contains invalid characters",
                name
            )));
        }

        if starts_with_dot(bare) {
            return Err(validation_error(format!(
                "Package name '{}' cannot start with a dot",
                name
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segment for the registry document URL.
    ///
    /// The registry expects the scope separator escaped: `@scope%2Fname`.
    pub fn url_path_segment(&self) -> String {
        match self.0.strip_prefix('@') {
            Some(scoped) => format!("@{}", urlencoding::encode(scoped)),
            None => urlencoding::encode(&self.0).into_owned(),
        }
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
