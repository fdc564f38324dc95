/// Formatter adapters for the supported manifest layouts
mod json_formatter;
mod ndjson_formatter;

pub use json_formatter::JsonManifestFormatter;
pub use ndjson_formatter::NdjsonManifestFormatter;
