use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let CI systems tell a bad invocation apart from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the manifest was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable inventory, bad config, file I/O error, etc.)
    ApplicationError = 3,
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for manifest generation.
///
/// The component formatters never fail; these cover the file handling and
/// configuration around them.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Inventory file not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse inventory file: {path}\nDetails: {details}\n\n💡 Hint: Top-level keys must be ecosystem tags (linux, npm, pip, ...) holding lists of package records")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Unsupported inventory format: {path}\n\n💡 Hint: Use a .json, .yml, .yaml or .toml file")]
    UnsupportedInventoryFormat { path: PathBuf },

    #[error("Invalid ecosystem: {value}\n\n💡 Hint: Valid ecosystems are {valid}")]
    InvalidEcosystem { value: String, valid: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
