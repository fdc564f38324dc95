//! Configuration file support for cg-manifest.
//!
//! Provides YAML-based configuration through `cg-manifest.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::component_formatting::domain::{DistroInfo, Ecosystem};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cg-manifest.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub distro: Option<DistroInfo>,
    pub exclude_ecosystems: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`, if set. Only valid after [`load_config_from_path`]
    /// has validated the file.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: format: {}", e);
        }
    }

    if let Some(ref tags) = config.exclude_ecosystems {
        for (i, tag) in tags.iter().enumerate() {
            if tag.parse::<Ecosystem>().is_err() {
                bail!(
                    "Invalid config: exclude_ecosystems[{}] '{}' is not a known ecosystem.\n\n\
                     💡 Hint: Valid ecosystems are {}",
                    i,
                    tag,
                    Ecosystem::valid_tags()
                );
            }
        }
    }

    if let Some(ref distro) = config.distro {
        if distro.id.trim().is_empty() || distro.version_id.trim().is_empty() {
            bail!(
                "Invalid config: distro.id and distro.versionId must not be empty.\n\n\
                 💡 Hint: Use the values from /etc/os-release, e.g. id: Debian, versionId: \"10\"."
            );
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
