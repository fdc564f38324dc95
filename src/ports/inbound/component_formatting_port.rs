use crate::application::dto::{FormatRequest, FormatResponse};
use crate::shared::Result;

/// ComponentFormattingPort - Inbound port for the formatting use case
///
/// The CLI drives the application through this trait; tests can drive it
/// the same way with mock outbound ports.
pub trait ComponentFormattingPort {
    /// Formats every record of the requested inventory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The inventory cannot be read or parsed
    /// - An excluded ecosystem tag is invalid
    fn format_components(&self, request: FormatRequest) -> Result<FormatResponse>;
}
