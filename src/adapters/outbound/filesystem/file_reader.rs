use crate::component_formatting::domain::Inventory;
use crate::ports::outbound::InventoryReader;
use crate::shared::error::ManifestError;
use crate::shared::security::{validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Serialization of an inventory document, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InventoryFormat {
    Json,
    Yaml,
    Toml,
}

impl InventoryFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(InventoryFormat::Json),
            "yml" | "yaml" => Some(InventoryFormat::Yaml),
            "toml" => Some(InventoryFormat::Toml),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> std::result::Result<Inventory, String> {
        match self {
            InventoryFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            InventoryFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            InventoryFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// FileSystemReader adapter for loading inventory documents from disk
///
/// Accepts `.json`, `.yml`/`.yaml` and `.toml` files. Symlinks, non-regular
/// files and oversized files are refused before anything is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryReader for FileSystemReader {
    fn read_inventory(&self, path: &Path) -> Result<Inventory> {
        if !path.exists() {
            return Err(ManifestError::InventoryNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the --input path, or run the package scan that produces the inventory first".to_string(),
            }
            .into());
        }

        let format = InventoryFormat::from_path(path).ok_or_else(|| {
            ManifestError::UnsupportedInventoryFormat {
                path: path.to_path_buf(),
            }
        })?;

        validate_input_file(path, "inventory file", MAX_FILE_SIZE)?;

        let content = fs::read_to_string(path).map_err(|e| ManifestError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        format.parse(&content).map_err(|details| {
            ManifestError::InventoryParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}
