use crate::shared::error::ManifestError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum inventory file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects symbolic links without following them.
///
/// A missing path is accepted; callers that need existence check it themselves.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    if metadata.is_symlink() {
        return Err(ManifestError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("Refusing to {} through a symbolic link", operation),
            hint: "Pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that `path` is a regular, non-symlink file no larger than `max_size`.
///
/// # Returns
/// The file size in bytes
///
/// # Errors
/// Returns an error if the metadata cannot be read, the path is a symlink or
/// not a regular file, or the file exceeds `max_size`
pub fn validate_input_file(path: &Path, description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ManifestError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(ManifestError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Symbolic links are not followed; pass the real file path".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ManifestError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", description),
        }
        .into());
    }

    let size = metadata.len();
    if size > max_size {
        return Err(ManifestError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, limit {} bytes)",
                description, size, max_size
            ),
            hint: "Split the inventory into smaller files".to_string(),
        }
        .into());
    }

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_input_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("inventory.json");
        fs::write(&file_path, "{}").unwrap();

        let size = validate_input_file(&file_path, "inventory", MAX_FILE_SIZE).unwrap();
        assert_eq!(size, 2);
    }

    #[test]
    fn test_validate_input_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_input_file(temp_dir.path(), "inventory", MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not a regular file"));
    }

    #[test]
    fn test_validate_input_file_exceeds_limit() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("inventory.json");
        fs::write(&file_path, "0123456789").unwrap();

        let result = validate_input_file(&file_path, "inventory", 4);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_input_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_input_file(
            &temp_dir.path().join("missing.json"),
            "inventory",
            MAX_FILE_SIZE,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("metadata"));
    }

    #[test]
    fn test_reject_symlink_missing_path_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        assert!(reject_symlink(&temp_dir.path().join("out.json"), "write").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_reject_symlink_detects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = reject_symlink(&link, "write");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("symbolic link"));

        let result = validate_input_file(&link, "inventory", MAX_FILE_SIZE);
        assert!(result.is_err());
    }

    #[test]
    fn test_max_file_size_constant() {
        assert_eq!(MAX_FILE_SIZE, 100 * 1024 * 1024);
    }
}
