use serde::{Deserialize, Serialize};

/// Identity of the Linux distribution the packages were installed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistroInfo {
    /// Distribution id, e.g. `Debian`
    pub id: String,
    /// Distribution release, e.g. `10`
    pub version_id: String,
}

impl DistroInfo {
    pub fn new(id: impl Into<String>, version_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version_id: version_id.into(),
        }
    }
}
