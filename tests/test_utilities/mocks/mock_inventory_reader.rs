use cg_manifest::prelude::*;
use std::path::Path;

/// Mock InventoryReader for testing
///
/// Parses the given JSON text on every read, so tests exercise the real
/// deserialization of inventory documents.
pub struct MockInventoryReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockInventoryReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl InventoryReader for MockInventoryReader {
    fn read_inventory(&self, _path: &Path) -> Result<Inventory> {
        if self.should_fail {
            anyhow::bail!("Mock inventory read failure");
        }
        Ok(serde_json::from_str(&self.content)?)
    }
}
