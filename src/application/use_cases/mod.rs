/// Use cases module containing application business logic orchestration
mod format_components;

pub use format_components::FormatComponentsUseCase;
