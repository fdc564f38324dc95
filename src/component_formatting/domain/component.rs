//! Component records - the normalized output unit, one per detected dependency
//!
//! The serialized shape is consumed by downstream compliance tooling and must
//! not change: `{"Component":{"Type":<tag>,<Payload>:{...}}}`. The `Type`
//! values keep their historical capitalization (`Pip`, `RubyGems` next to
//! lowercase `npm`, `cargo`, `go`). Absent input fields are omitted rather
//! than written as `null`.

use serde::{Deserialize, Serialize};

/// Top-level wrapper: `{"Component": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    #[serde(rename = "Component")]
    pub component: Component,
}

impl ComponentRecord {
    pub fn new(component: Component) -> Self {
        Self { component }
    }
}

impl From<Component> for ComponentRecord {
    fn from(component: Component) -> Self {
        Self::new(component)
    }
}

/// One variant per ecosystem shape, discriminated by `Type`
///
/// Each variant carries exactly one payload, so a record can never hold
/// two ecosystems' data at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum Component {
    #[serde(rename = "linux")]
    Linux {
        #[serde(rename = "Linux")]
        linux: LinuxPackage,
    },
    #[serde(rename = "npm")]
    Npm {
        #[serde(rename = "Npm")]
        npm: NamedVersion,
    },
    #[serde(rename = "Pip")]
    Pip {
        #[serde(rename = "Pip")]
        pip: NamedVersion,
    },
    #[serde(rename = "RubyGems")]
    RubyGems {
        #[serde(rename = "RubyGems")]
        ruby_gems: NamedVersion,
    },
    #[serde(rename = "cargo")]
    Cargo {
        #[serde(rename = "Cargo")]
        cargo: NamedVersion,
    },
    #[serde(rename = "go")]
    Go {
        #[serde(rename = "Go")]
        go: NamedVersion,
    },
    #[serde(rename = "git")]
    Git {
        #[serde(rename = "Git")]
        git: GitRepository,
    },
    #[serde(rename = "other")]
    Other {
        #[serde(rename = "Other")]
        other: OtherComponent,
    },
}

/// Payload shared by npm, Pip, RubyGems, Cargo and Go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedVersion {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxPackage {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "Distribution", skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
    #[serde(rename = "Release", skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(rename = "Pool-URL", skip_serializing_if = "Option::is_none")]
    pub pool_url: Option<String>,
    #[serde(rename = "Key-URL", skip_serializing_if = "Option::is_none")]
    pub key_url: Option<String>,
}

/// Git payload; field casing differs from the other payloads on purpose
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRepository {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "repositoryUrl", skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(rename = "commitHash", skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherComponent {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "DownloadUrl", skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// One line of the emitted manifest
///
/// Typed records come from the ecosystem formatters; `Manual` holds a
/// hand-built record that is passed through untouched apart from flag
/// cleanup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ManifestEntry {
    Component(ComponentRecord),
    Manual(serde_json::Value),
}

impl From<ComponentRecord> for ManifestEntry {
    fn from(record: ComponentRecord) -> Self {
        ManifestEntry::Component(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn npm(name: &str, version: &str) -> ComponentRecord {
        ComponentRecord::new(Component::Npm {
            npm: NamedVersion {
                name: Some(name.to_string()),
                version: Some(version.to_string()),
            },
        })
    }

    #[test]
    fn test_serialize_npm_shape() {
        let json = serde_json::to_string(&npm("eslint", "7.7.0")).unwrap();
        assert_eq!(
            json,
            r#"{"Component":{"Type":"npm","Npm":{"Name":"eslint","Version":"7.7.0"}}}"#
        );
    }

    #[test]
    fn test_serialize_linux_shape() {
        let record = ComponentRecord::new(Component::Linux {
            linux: LinuxPackage {
                name: Some("yarn".to_string()),
                version: Some("1.22.5-1".to_string()),
                distribution: Some("Debian".to_string()),
                release: Some("10".to_string()),
                pool_url: Some("https://dl.yarnpkg.com/debian".to_string()),
                key_url: Some("https://dl.yarnpkg.com/debian/pubkey.gpg".to_string()),
            },
        });
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"Component":{"Type":"linux","Linux":{"Name":"yarn","Version":"1.22.5-1","Distribution":"Debian","Release":"10","Pool-URL":"https://dl.yarnpkg.com/debian","Key-URL":"https://dl.yarnpkg.com/debian/pubkey.gpg"}}}"#
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let record = ComponentRecord::new(Component::Go {
            go: NamedVersion {
                name: Some("golang.org/x/tools/gopls".to_string()),
                version: None,
            },
        });
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"Component":{"Type":"go","Go":{"Name":"golang.org/x/tools/gopls"}}}"#
        );
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_deserialize_tagged_record() {
        let record: ComponentRecord = serde_json::from_str(
            r#"{"Component":{"Type":"RubyGems","RubyGems":{"Name":"rake","Version":"13.0.1"}}}"#,
        )
        .unwrap();
        assert_eq!(
            record.component,
            Component::RubyGems {
                ruby_gems: NamedVersion {
                    name: Some("rake".to_string()),
                    version: Some("13.0.1".to_string()),
                },
            }
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_type() {
        let result = serde_json::from_str::<ComponentRecord>(
            r#"{"Component":{"Type":"maven","Maven":{"Name":"junit"}}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_manifest_entry_untagged() {
        let typed = ManifestEntry::from(npm("eslint", "7.7.0"));
        let manual = ManifestEntry::Manual(serde_json::json!({"Component": {"Type": "custom"}}));

        assert_eq!(
            serde_json::to_string(&typed).unwrap(),
            serde_json::to_string(&npm("eslint", "7.7.0")).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&manual).unwrap(),
            r#"{"Component":{"Type":"custom"}}"#
        );
    }
}
