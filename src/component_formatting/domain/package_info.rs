use super::flags::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Package record as gathered by an upstream scanner
///
/// Every field is optional: missing data flows through to the component
/// record as an absent field. Keys the formatters do not use are ignored.
/// Reading is lenient so one sloppy record never sinks the inventory:
/// scalar values that are not strings (`"version": 10`) are kept as their
/// JSON text, and the skip flag follows [`is_truthy`] in any of its
/// spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPackageInfo")]
pub struct PackageInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Suppresses the record entirely when set
    #[serde(rename = "cgIgnore", skip_serializing_if = "std::ops::Not::not")]
    pub skip: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_key_url: Option<String>,
}

/// Wire form of [`PackageInfo`], before values are normalized
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPackageInfo {
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    version: Option<Value>,
    #[serde(default)]
    repository_url: Option<Value>,
    #[serde(default)]
    commit_hash: Option<Value>,
    #[serde(default)]
    download_url: Option<Value>,
    #[serde(default)]
    pool_url: Option<Value>,
    #[serde(default)]
    pool_key_url: Option<Value>,
    #[serde(default, rename = "cgIgnore")]
    cg_ignore: Option<Value>,
    #[serde(default, rename = "CgIgnore")]
    cg_ignore_title: Option<Value>,
    #[serde(default, rename = "CGIgnore")]
    cg_ignore_upper: Option<Value>,
}

impl From<RawPackageInfo> for PackageInfo {
    fn from(raw: RawPackageInfo) -> Self {
        let skip = [&raw.cg_ignore, &raw.cg_ignore_title, &raw.cg_ignore_upper]
            .into_iter()
            .flatten()
            .any(is_truthy);

        Self {
            name: into_text(raw.name),
            version: into_text(raw.version),
            skip,
            repository_url: into_text(raw.repository_url),
            commit_hash: into_text(raw.commit_hash),
            download_url: into_text(raw.download_url),
            pool_url: into_text(raw.pool_url),
            pool_key_url: into_text(raw.pool_key_url),
        }
    }
}

/// Strings verbatim, `null` as absent, any other value as its JSON text
fn into_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl PackageInfo {
    /// Record with a name and version, the shape most ecosystems need
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// Git checkout record: name, remote URL and commit
    pub fn git(
        name: impl Into<String>,
        repository_url: impl Into<String>,
        commit_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            repository_url: Some(repository_url.into()),
            commit_hash: Some(commit_hash.into()),
            ..Self::default()
        }
    }

    pub fn with_download_url(mut self, download_url: impl Into<String>) -> Self {
        self.download_url = Some(download_url.into());
        self
    }

    pub fn with_pool(mut self, pool_url: impl Into<String>, pool_key_url: impl Into<String>) -> Self {
        self.pool_url = Some(pool_url.into());
        self.pool_key_url = Some(pool_key_url.into());
        self
    }

    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }
}
