use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest credentials file we are willing to read (1 MB)
pub const MAX_CREDENTIALS_FILE_SIZE: u64 = 1024 * 1024;

/// Validates that a path exists and resolves to a regular file
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., ".npmrc") for error messages
///
/// # Errors
/// Returns an error if the path doesn't exist or is not a regular file.
/// Returns the file size on success so callers can enforce limits.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Rejects an output path that currently is a symbolic link.
///
/// A path that does not exist yet is fine; the report will be created there.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
            path.display()
        ),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => anyhow::bail!("Failed to read metadata for {}: {}", path.display(), e),
    }
}
