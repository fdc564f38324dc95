/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod component_formatting_port;

pub use component_formatting_port::ComponentFormattingPort;
