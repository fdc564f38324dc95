use crate::shared::error::ManifestError;

/// Ecosystem tag selecting which component shape a package record maps onto
///
/// `Pipx` shares the `Pip` shape and `Languages` shares the `Other` shape.
/// `Manual` is the pass-through for hand-built records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ecosystem {
    Linux,
    Npm,
    Pip,
    Pipx,
    Gem,
    Cargo,
    Go,
    Git,
    Other,
    Languages,
    Manual,
}

impl Ecosystem {
    /// Every ecosystem, in the order records are emitted
    pub const ALL: [Ecosystem; 11] = [
        Ecosystem::Linux,
        Ecosystem::Npm,
        Ecosystem::Pip,
        Ecosystem::Pipx,
        Ecosystem::Gem,
        Ecosystem::Cargo,
        Ecosystem::Go,
        Ecosystem::Git,
        Ecosystem::Other,
        Ecosystem::Languages,
        Ecosystem::Manual,
    ];

    /// Canonical lowercase tag, as used for inventory keys and CLI flags
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Linux => "linux",
            Ecosystem::Npm => "npm",
            Ecosystem::Pip => "pip",
            Ecosystem::Pipx => "pipx",
            Ecosystem::Gem => "gem",
            Ecosystem::Cargo => "cargo",
            Ecosystem::Go => "go",
            Ecosystem::Git => "git",
            Ecosystem::Other => "other",
            Ecosystem::Languages => "languages",
            Ecosystem::Manual => "manual",
        }
    }

    /// The `Type` discriminator written into component records
    ///
    /// `None` for `Manual`, whose records are passed through as-is.
    pub fn component_type(&self) -> Option<&'static str> {
        match self {
            Ecosystem::Linux => Some("linux"),
            Ecosystem::Npm => Some("npm"),
            Ecosystem::Pip | Ecosystem::Pipx => Some("Pip"),
            Ecosystem::Gem => Some("RubyGems"),
            Ecosystem::Cargo => Some("cargo"),
            Ecosystem::Go => Some("go"),
            Ecosystem::Git => Some("git"),
            Ecosystem::Other | Ecosystem::Languages => Some("other"),
            Ecosystem::Manual => None,
        }
    }

    /// Comma-separated list of all tags, for error hints
    pub fn valid_tags() -> String {
        Self::ALL
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::str::FromStr for Ecosystem {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == normalized)
            .ok_or_else(|| ManifestError::InvalidEcosystem {
                value: s.to_string(),
                valid: Self::valid_tags(),
            })
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
