use crate::component_formatting::domain::{Ecosystem, ManifestEntry};
use std::collections::BTreeMap;

/// FormatResponse - Output of the component formatting use case
///
/// Entries are in emission order; the counters feed the completion message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatResponse {
    pub entries: Vec<ManifestEntry>,
    /// Records dropped by their own skip flag
    pub skipped_count: usize,
    /// Records never looked at because their ecosystem was excluded
    pub excluded_count: usize,
    /// Emitted entries per ecosystem; ecosystems with no entries are absent
    pub counts_by_ecosystem: BTreeMap<Ecosystem, usize>,
}

impl FormatResponse {
    pub fn formatted_count(&self) -> usize {
        self.entries.len()
    }

    pub fn count_for(&self, ecosystem: Ecosystem) -> usize {
        self.counts_by_ecosystem.get(&ecosystem).copied().unwrap_or(0)
    }
}
