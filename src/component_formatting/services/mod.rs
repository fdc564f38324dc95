mod component_formatter;
mod ecosystem_filter;

pub use component_formatter::ComponentFormatter;
pub use ecosystem_filter::EcosystemFilter;
