use crate::component_formatting::domain::ManifestEntry;
use crate::ports::outbound::ManifestFormatter;
use crate::shared::Result;

/// NdjsonManifestFormatter adapter - one compact record per line
///
/// Each line is exactly the compact serialization of one entry, so
/// consumers can stream or `grep` the manifest.
pub struct NdjsonManifestFormatter;

impl NdjsonManifestFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NdjsonManifestFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestFormatter for NdjsonManifestFormatter {
    fn format(&self, entries: &[ManifestEntry]) -> Result<String> {
        let mut output = String::new();
        for entry in entries {
            output.push_str(&serde_json::to_string(entry)?);
            output.push('\n');
        }
        Ok(output)
    }
}
