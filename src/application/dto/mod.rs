/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI adapter and the use case, keeping the
/// domain types free of invocation details.
mod format_request;
mod format_response;
mod output_format;

pub use format_request::{FormatRequest, FormatRequestBuilder};
pub use format_response::FormatResponse;
pub use output_format::OutputFormat;
