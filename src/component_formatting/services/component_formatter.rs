use crate::component_formatting::domain::flags::{is_truthy, DISPLAY_FLAG_KEYS, SKIP_FLAG_KEYS};
use crate::component_formatting::domain::{
    Component, ComponentRecord, DistroInfo, Ecosystem, GitRepository, LinuxPackage, ManifestEntry,
    NamedVersion, OtherComponent, PackageInfo,
};
use serde_json::Value;

/// ComponentFormatter - maps package records onto component records
///
/// Every method is a pure transform returning `None` when the record's skip
/// flag is set. Values are copied verbatim; absent fields stay absent.
/// The only state is the distro identity used by [`ComponentFormatter::linux`].
#[derive(Debug, Clone, Default)]
pub struct ComponentFormatter {
    distro: Option<DistroInfo>,
}

impl ComponentFormatter {
    pub fn new(distro: Option<DistroInfo>) -> Self {
        Self { distro }
    }

    /// Formats a record for the given ecosystem
    ///
    /// `Manual` records have no fixed shape and go through
    /// [`ComponentFormatter::manual`] instead; passing `Ecosystem::Manual`
    /// here yields `None`.
    pub fn format(&self, ecosystem: Ecosystem, info: &PackageInfo) -> Option<ComponentRecord> {
        match ecosystem {
            Ecosystem::Linux => self.linux(info),
            Ecosystem::Npm => self.npm(info),
            Ecosystem::Pip => self.pip(info),
            Ecosystem::Pipx => self.pipx(info),
            Ecosystem::Gem => self.gem(info),
            Ecosystem::Cargo => self.cargo(info),
            Ecosystem::Go => self.go(info),
            Ecosystem::Git => self.git(info),
            Ecosystem::Other => self.other(info),
            Ecosystem::Languages => self.languages(info),
            Ecosystem::Manual => None,
        }
    }

    /// `linux` → `{"Type":"linux","Linux":{...}}`, Distribution and Release
    /// taken from the distro identity, never from the record
    pub fn linux(&self, info: &PackageInfo) -> Option<ComponentRecord> {
        if info.skip {
            return None;
        }
        Some(
            Component::Linux {
                linux: LinuxPackage {
                    name: info.name.clone(),
                    version: info.version.clone(),
                    distribution: self.distro.as_ref().map(|d| d.id.clone()),
                    release: self.distro.as_ref().map(|d| d.version_id.clone()),
                    pool_url: info.pool_url.clone(),
                    key_url: info.pool_key_url.clone(),
                },
            }
            .into(),
        )
    }

    pub fn npm(&self, info: &PackageInfo) -> Option<ComponentRecord> {
        named_version(info).map(|npm| Component::Npm { npm }.into())
    }

    pub fn pip(&self, info: &PackageInfo) -> Option<ComponentRecord> {
        named_version(info).map(|pip| Component::Pip { pip }.into())
    }

    /// pipx installs are reported as plain Pip components
    pub fn pipx(&self, info: &PackageInfo) -> Option<ComponentRecord> {
        self.pip(info)
    }

    pub fn gem(&self, info: &PackageInfo) -> Option<ComponentRecord> {
        named_version(info).map(|ruby_gems| Component::RubyGems { ruby_gems }.into())
    }

    pub fn cargo(&self, info: &PackageInfo) -> Option<ComponentRecord> {
        named_version(info).map(|cargo| Component::Cargo { cargo }.into())
    }

    pub fn go(&self, info: &PackageInfo) -> Option<ComponentRecord> {
        named_version(info).map(|go| Component::Go { go }.into())
    }

    /// Git checkouts carry no version, only remote and commit
    pub fn git(&self, info: &PackageInfo) -> Option<ComponentRecord> {
        if info.skip {
            return None;
        }
        Some(
            Component::Git {
                git: GitRepository {
                    name: info.name.clone(),
                    repository_url: info.repository_url.clone(),
                    commit_hash: info.commit_hash.clone(),
                },
            }
            .into(),
        )
    }

    pub fn other(&self, info: &PackageInfo) -> Option<ComponentRecord> {
        if info.skip {
            return None;
        }
        Some(
            Component::Other {
                other: OtherComponent {
                    name: info.name.clone(),
                    version: info.version.clone(),
                    download_url: info.download_url.clone(),
                },
            }
            .into(),
        )
    }

    /// Language runtimes are reported as `other` components
    pub fn languages(&self, info: &PackageInfo) -> Option<ComponentRecord> {
        self.other(info)
    }

    /// Passes a hand-built record through
    ///
    /// Returns `None` if any skip-flag key is truthy. Otherwise removes the
    /// display-only flags and hands the record back with every other key and
    /// its order intact.
    pub fn manual(&self, mut record: Value) -> Option<ManifestEntry> {
        let Some(fields) = record.as_object_mut() else {
            return Some(ManifestEntry::Manual(record));
        };

        if SKIP_FLAG_KEYS
            .iter()
            .any(|key| fields.get(*key).is_some_and(is_truthy))
        {
            return None;
        }

        for key in DISPLAY_FLAG_KEYS {
            fields.shift_remove(key);
        }

        Some(ManifestEntry::Manual(record))
    }
}

fn named_version(info: &PackageInfo) -> Option<NamedVersion> {
    if info.skip {
        return None;
    }
    Some(NamedVersion {
        name: info.name.clone(),
        version: info.version.clone(),
    })
}
