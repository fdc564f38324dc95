use crate::component_formatting::domain::Inventory;
use crate::shared::Result;
use std::path::Path;

/// InventoryReader port for loading collected package records
///
/// Collection itself happens upstream; this port only loads the resulting
/// inventory document from wherever it was stored.
pub trait InventoryReader {
    /// Reads and parses the inventory document at `path`
    ///
    /// # Errors
    /// Returns an error if the document cannot be found, read or parsed
    fn read_inventory(&self, path: &Path) -> Result<Inventory>;
}
