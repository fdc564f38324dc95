/// Component formatting domain - Ecosystem tags, package records and the
/// formatter dispatch that turns one into a component record.
///
/// Pure code: no I/O, no shared mutable state.
pub mod domain;
pub mod services;
