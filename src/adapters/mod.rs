/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: files, stdout, stderr
/// and the manifest renderers. The CLI in `main.rs` is the only inbound
/// adapter.
pub mod outbound;
