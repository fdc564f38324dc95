//! cg-manifest - Component manifest formatter
//!
//! Turns package records gathered by upstream scanners (OS package
//! databases, lockfiles, git checkouts) into normalized component records
//! for inventory and compliance reporting. Each ecosystem tag (`npm`, `pip`,
//! `git`, `linux`, ...) maps onto a fixed, tagged JSON shape.
//!
//! # Architecture
//!
//! - **Domain Layer** (`component_formatting`): record types and the pure formatter dispatch
//! - **Application Layer** (`application`): use case, DTOs and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): filesystem, console and manifest renderers
//! - **Shared** (`shared`): error types, result alias and file checks
//!
//! # Example
//!
//! ```
//! use cg_manifest::prelude::*;
//!
//! let formatter = ComponentFormatter::new(Some(DistroInfo::new("Debian", "10")));
//!
//! let record = formatter.gem(&PackageInfo::new("rake", "13.0.1")).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&record).unwrap(),
//!     r#"{"Component":{"Type":"RubyGems","RubyGems":{"Name":"rake","Version":"13.0.1"}}}"#
//! );
//!
//! // Skipped records produce nothing
//! let skipped = PackageInfo::new("x", "1").skipped();
//! assert!(formatter.format(Ecosystem::Npm, &skipped).is_none());
//! ```

pub mod adapters;
pub mod application;
pub mod component_formatting;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonManifestFormatter, NdjsonManifestFormatter,
    };
    pub use crate::application::dto::{FormatRequest, FormatResponse, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::FormatComponentsUseCase;
    pub use crate::component_formatting::domain::{
        Component, ComponentRecord, DistroInfo, Ecosystem, Inventory, ManifestEntry,
        PackageInfo,
    };
    pub use crate::component_formatting::services::{ComponentFormatter, EcosystemFilter};
    pub use crate::ports::inbound::ComponentFormattingPort;
    pub use crate::ports::outbound::{
        InventoryReader, ManifestFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
