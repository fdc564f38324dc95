use super::{DistroInfo, Ecosystem, PackageInfo};
use serde::{Deserialize, Deserializer};

/// Collected package records grouped by ecosystem tag
///
/// This is the input document shape: an optional `distro` identity plus one
/// list per ecosystem. A key present with no value (`npm:` in YAML) reads as
/// an empty list. Unknown top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub distro: Option<DistroInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub linux: Vec<PackageInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub npm: Vec<PackageInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pip: Vec<PackageInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pipx: Vec<PackageInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gem: Vec<PackageInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cargo: Vec<PackageInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub go: Vec<PackageInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub git: Vec<PackageInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub other: Vec<PackageInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub languages: Vec<PackageInfo>,
    /// Hand-built component records of arbitrary shape
    #[serde(default, deserialize_with = "null_as_empty")]
    pub manual: Vec<serde_json::Value>,
}

impl Inventory {
    /// Typed package records for an ecosystem; always empty for `Manual`
    pub fn packages(&self, ecosystem: Ecosystem) -> &[PackageInfo] {
        match ecosystem {
            Ecosystem::Linux => &self.linux,
            Ecosystem::Npm => &self.npm,
            Ecosystem::Pip => &self.pip,
            Ecosystem::Pipx => &self.pipx,
            Ecosystem::Gem => &self.gem,
            Ecosystem::Cargo => &self.cargo,
            Ecosystem::Go => &self.go,
            Ecosystem::Git => &self.git,
            Ecosystem::Other => &self.other,
            Ecosystem::Languages => &self.languages,
            Ecosystem::Manual => &[],
        }
    }

    /// Number of input records for an ecosystem, manual included
    pub fn record_count(&self, ecosystem: Ecosystem) -> usize {
        match ecosystem {
            Ecosystem::Manual => self.manual.len(),
            other => self.packages(other).len(),
        }
    }

    pub fn total_records(&self) -> usize {
        Ecosystem::ALL.iter().map(|e| self.record_count(*e)).sum()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
