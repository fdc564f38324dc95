pub mod component;
pub mod distro_info;
pub mod ecosystem;
pub mod flags;
pub mod inventory;
pub mod package_info;

pub use component::{
    Component, ComponentRecord, GitRepository, LinuxPackage, ManifestEntry, NamedVersion,
    OtherComponent,
};
pub use distro_info::DistroInfo;
pub use ecosystem::Ecosystem;
pub use inventory::Inventory;
pub use package_info::PackageInfo;
