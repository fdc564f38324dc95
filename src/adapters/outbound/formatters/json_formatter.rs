use crate::component_formatting::domain::ManifestEntry;
use crate::ports::outbound::ManifestFormatter;
use crate::shared::Result;

/// JsonManifestFormatter adapter - pretty-printed JSON array
///
/// Output ends with a newline so the file is friendly to line-based tools.
pub struct JsonManifestFormatter;

impl JsonManifestFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonManifestFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestFormatter for JsonManifestFormatter {
    fn format(&self, entries: &[ManifestEntry]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(entries)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_formatting::domain::{
        Component, ComponentRecord, GitRepository, NamedVersion,
    };
    use serde_json::{json, Value};

    fn entries() -> Vec<ManifestEntry> {
        vec![
            ComponentRecord::new(Component::Npm {
                npm: NamedVersion {
                    name: Some("eslint".to_string()),
                    version: Some("7.7.0".to_string()),
                },
            })
            .into(),
            ComponentRecord::new(Component::Git {
                git: GitRepository {
                    name: Some("Oh My Zsh!".to_string()),
                    repository_url: Some("https://github.com/ohmyzsh/ohmyzsh.git".to_string()),
                    commit_hash: Some("cddac7177abc358f44efb469af43191922273705".to_string()),
                },
            })
            .into(),
            ManifestEntry::Manual(json!({"Component": {"Type": "other"}, "DevelopmentDependency": true})),
        ]
    }

    #[test]
    fn test_format_pretty_array() {
        let output = JsonManifestFormatter::new().format(&entries()).unwrap();

        assert!(output.starts_with("[\n"));
        assert!(output.ends_with("]\n"));
        assert!(output.contains("\"Type\": \"npm\""));
        assert!(output.contains("\"repositoryUrl\": \"https://github.com/ohmyzsh/ohmyzsh.git\""));
    }

    #[test]
    fn test_format_parses_back_to_same_records() {
        let output = JsonManifestFormatter::new().format(&entries()).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            parsed,
            json!([
                {"Component": {"Type": "npm", "Npm": {"Name": "eslint", "Version": "7.7.0"}}},
                {"Component": {"Type": "git", "Git": {
                    "Name": "Oh My Zsh!",
                    "repositoryUrl": "https://github.com/ohmyzsh/ohmyzsh.git",
                    "commitHash": "cddac7177abc358f44efb469af43191922273705"
                }}},
                {"Component": {"Type": "other"}, "DevelopmentDependency": true}
            ])
        );
    }

    #[test]
    fn test_format_empty() {
        let output = JsonManifestFormatter::new().format(&[]).unwrap();
        assert_eq!(output, "[]\n");
    }
}
