use crate::component_formatting::domain::ManifestEntry;
use crate::shared::Result;

/// ManifestFormatter port for rendering the formatted component list
///
/// Implementations decide the document layout (pretty array, one record per
/// line, ...) but never alter the records themselves.
pub trait ManifestFormatter {
    /// Renders the entries, in order, as a string ready for presentation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, entries: &[ManifestEntry]) -> Result<String>;
}
