use crate::component_formatting::domain::DistroInfo;
use crate::shared::error::ManifestError;
use crate::shared::Result;
use std::path::PathBuf;

/// FormatRequest - Input to the component formatting use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    /// Inventory document to format
    pub inventory_path: PathBuf,
    /// Distro identity that wins over the inventory's own `distro` key
    pub distro_override: Option<DistroInfo>,
    /// Ecosystem tags to leave out entirely
    pub excluded_ecosystems: Vec<String>,
}

impl FormatRequest {
    pub fn builder() -> FormatRequestBuilder {
        FormatRequestBuilder::default()
    }
}

/// Builder for [`FormatRequest`]
///
/// Distro id and version are collected separately because they arrive as
/// two CLI flags; `build` rejects a half-specified identity.
#[derive(Debug, Default)]
pub struct FormatRequestBuilder {
    inventory_path: Option<PathBuf>,
    distro_id: Option<String>,
    distro_version: Option<String>,
    excluded_ecosystems: Vec<String>,
}

impl FormatRequestBuilder {
    pub fn inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.inventory_path = Some(path.into());
        self
    }

    pub fn distro_id(mut self, id: Option<String>) -> Self {
        self.distro_id = id;
        self
    }

    pub fn distro_version(mut self, version: Option<String>) -> Self {
        self.distro_version = version;
        self
    }

    pub fn distro(self, distro: Option<DistroInfo>) -> Self {
        match distro {
            Some(d) => self.distro_id(Some(d.id)).distro_version(Some(d.version_id)),
            None => self,
        }
    }

    pub fn excluded_ecosystems(mut self, tags: Vec<String>) -> Self {
        self.excluded_ecosystems = tags;
        self
    }

    /// # Errors
    /// - No inventory path was given
    /// - Only one of distro id / version was given, or either is blank
    pub fn build(self) -> Result<FormatRequest> {
        let inventory_path = self.inventory_path.ok_or_else(|| ManifestError::Validation {
            message: "inventory path is required".to_string(),
        })?;

        let distro_override = match (self.distro_id, self.distro_version) {
            (None, None) => None,
            (Some(id), Some(version)) => {
                if id.trim().is_empty() || version.trim().is_empty() {
                    return Err(ManifestError::Validation {
                        message: "distro id and version must not be empty".to_string(),
                    }
                    .into());
                }
                Some(DistroInfo::new(id, version))
            }
            _ => {
                return Err(ManifestError::Validation {
                    message: "distro id and distro version must be given together".to_string(),
                }
                .into())
            }
        };

        Ok(FormatRequest {
            inventory_path,
            distro_override,
            excluded_ecosystems: self.excluded_ecosystems,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_minimal() {
        let request = FormatRequest::builder()
            .inventory_path("inventory.json")
            .build()
            .unwrap();
        assert_eq!(request.inventory_path, PathBuf::from("inventory.json"));
        assert!(request.distro_override.is_none());
        assert!(request.excluded_ecosystems.is_empty());
    }

    #[test]
    fn test_build_with_distro_and_exclusions() {
        let request = FormatRequest::builder()
            .inventory_path("inventory.yml")
            .distro_id(Some("Debian".to_string()))
            .distro_version(Some("10".to_string()))
            .excluded_ecosystems(vec!["pipx".to_string()])
            .build()
            .unwrap();
        assert_eq!(request.distro_override, Some(DistroInfo::new("Debian", "10")));
        assert_eq!(request.excluded_ecosystems, vec!["pipx".to_string()]);
    }

    #[test]
    fn test_build_with_distro_info() {
        let request = FormatRequest::builder()
            .inventory_path("inventory.yml")
            .distro(Some(DistroInfo::new("Alpine", "3.18")))
            .build()
            .unwrap();
        assert_eq!(request.distro_override, Some(DistroInfo::new("Alpine", "3.18")));
    }

    #[test]
    fn test_build_requires_inventory_path() {
        let err = FormatRequest::builder().build().unwrap_err();
        assert!(err.to_string().contains("inventory path is required"));
    }

    #[test]
    fn test_build_rejects_half_distro() {
        let err = FormatRequest::builder()
            .inventory_path("inventory.json")
            .distro_id(Some("Debian".to_string()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must be given together"));
    }

    #[test]
    fn test_build_rejects_blank_distro() {
        let err = FormatRequest::builder()
            .inventory_path("inventory.json")
            .distro_id(Some(" ".to_string()))
            .distro_version(Some("10".to_string()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
