use crate::component_formatting::domain::Ecosystem;
use crate::shared::error::ManifestError;
use crate::shared::Result;
use std::collections::BTreeSet;

/// Upper bound on exclusion entries; there are only eleven ecosystems
const MAX_EXCLUDED_ECOSYSTEMS: usize = 16;

/// EcosystemFilter - Drops whole ecosystems from the manifest
///
/// Built from user-supplied tags (CLI `--exclude-ecosystem` or the config
/// file). Excluded ecosystems are never formatted at all, which is different
/// from records being skipped by their own `cgIgnore` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcosystemFilter {
    excluded: BTreeSet<Ecosystem>,
}

impl EcosystemFilter {
    /// Parses and validates the exclusion tags
    ///
    /// # Errors
    /// - More than `MAX_EXCLUDED_ECOSYSTEMS` entries
    /// - A tag that is not a known ecosystem
    pub fn new<S: AsRef<str>>(tags: &[S]) -> Result<Self> {
        if tags.len() > MAX_EXCLUDED_ECOSYSTEMS {
            return Err(ManifestError::Validation {
                message: format!(
                    "Too many excluded ecosystems: {} (maximum: {})",
                    tags.len(),
                    MAX_EXCLUDED_ECOSYSTEMS
                ),
            }
            .into());
        }

        let excluded = tags
            .iter()
            .map(|tag| tag.as_ref().parse::<Ecosystem>())
            .collect::<std::result::Result<BTreeSet<_>, _>>()?;

        Ok(Self { excluded })
    }

    pub fn is_excluded(&self, ecosystem: Ecosystem) -> bool {
        self.excluded.contains(&ecosystem)
    }

    /// Ecosystems that survive the filter, in emission order
    pub fn included(&self) -> impl Iterator<Item = Ecosystem> + '_ {
        Ecosystem::ALL
            .into_iter()
            .filter(move |e| !self.is_excluded(*e))
    }

    pub fn excluded(&self) -> impl Iterator<Item = Ecosystem> + '_ {
        self.excluded.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_includes_everything() {
        let filter = EcosystemFilter::new::<&str>(&[]).unwrap();
        assert_eq!(filter.excluded().count(), 0);
        assert_eq!(filter.included().count(), Ecosystem::ALL.len());
    }

    #[test]
    fn test_excludes_listed_ecosystems() {
        let filter = EcosystemFilter::new(&["pipx", "Manual"]).unwrap();
        assert!(filter.is_excluded(Ecosystem::Pipx));
        assert!(filter.is_excluded(Ecosystem::Manual));
        assert!(!filter.is_excluded(Ecosystem::Pip));

        let included: Vec<_> = filter.included().collect();
        assert_eq!(included.len(), Ecosystem::ALL.len() - 2);
        assert_eq!(included[0], Ecosystem::Linux);
        assert!(!included.contains(&Ecosystem::Pipx));
    }

    #[test]
    fn test_duplicates_collapse() {
        let filter = EcosystemFilter::new(&["npm", "NPM", "npm"]).unwrap();
        assert_eq!(filter.excluded().collect::<Vec<_>>(), vec![Ecosystem::Npm]);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result = EcosystemFilter::new(&["npm", "maven"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("maven"));
    }

    #[test]
    fn test_too_many_entries_rejected() {
        let tags = vec!["npm".to_string(); MAX_EXCLUDED_ECOSYSTEMS + 1];
        let result = EcosystemFilter::new(&tags);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Too many excluded ecosystems"));
    }
}
