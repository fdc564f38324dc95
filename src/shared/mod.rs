/// Shared kernel - Error types, result alias and security helpers
///
/// Used by every layer; depends on nothing else in the crate.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
