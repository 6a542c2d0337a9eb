//! In-memory catalog of software and their releases

use crate::catalog::error::ItemError;
use crate::version::{SoftwareName, Version};

/// How urgent it is to adopt a release over its predecessor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// New features only
    #[default]
    Feature,
    /// Contains important fixes
    Bugfix,
    /// Contains critical fixes
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Feature => "feature",
            Severity::Bugfix => "bugfix",
            Severity::Critical => "critical",
        }
    }
}

/// Converts the catalog wire value (0, 1 or 2)
impl TryFrom<u64> for Severity {
    type Error = u64;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Severity::Feature),
            1 => Ok(Severity::Bugfix),
            2 => Ok(Severity::Critical),
            other => Err(other),
        }
    }
}

/// One row of a software's release history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasedVersion {
    pub version: Version,
    pub severity: Severity,
}

/// Catalog record of one software
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftwareEntry {
    name: SoftwareName,
    link: String,
    releases: Vec<ReleasedVersion>,
}

impl SoftwareEntry {
    /// Create an entry. The link and the release list must not be empty.
    pub fn new(
        name: SoftwareName,
        link: String,
        releases: Vec<ReleasedVersion>,
    ) -> Result<Self, ItemError> {
        if link.is_empty() {
            return Err(ItemError::EmptyLink);
        }
        if releases.is_empty() {
            return Err(ItemError::NoVersions);
        }

        Ok(Self {
            name,
            link,
            releases,
        })
    }

    pub fn name(&self) -> &SoftwareName {
        &self.name
    }

    /// Download link of the software
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Releases in catalog order
    pub fn releases(&self) -> &[ReleasedVersion] {
        &self.releases
    }
}

/// Validated catalog, immutable once built
///
/// Entries keep catalog order. Duplicated names are kept; lookups return the
/// first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<SoftwareEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<SoftwareEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SoftwareEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first entry whose name matches case-insensitively
    pub fn find(&self, name: &str) -> Option<&SoftwareEntry> {
        self.entries.iter().find(|entry| entry.name.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(name: &str, link: &str) -> SoftwareEntry {
        SoftwareEntry::new(
            SoftwareName::new(name).unwrap(),
            link.to_string(),
            vec![ReleasedVersion {
                version: "1.0".parse().unwrap(),
                severity: Severity::Feature,
            }],
        )
        .unwrap()
    }

    #[rstest]
    #[case(0, Ok(Severity::Feature))]
    #[case(1, Ok(Severity::Bugfix))]
    #[case(2, Ok(Severity::Critical))]
    #[case(3, Err(3))]
    fn severity_try_from_returns_expected(
        #[case] value: u64,
        #[case] expected: Result<Severity, u64>,
    ) {
        assert_eq!(Severity::try_from(value), expected);
    }

    #[test]
    fn severity_is_ordered_by_urgency() {
        assert!(Severity::Feature < Severity::Bugfix);
        assert!(Severity::Bugfix < Severity::Critical);
    }

    #[test]
    fn software_entry_requires_link_and_releases() {
        let name = SoftwareName::new("tool").unwrap();

        assert!(matches!(
            SoftwareEntry::new(name.clone(), String::new(), vec![]),
            Err(ItemError::EmptyLink)
        ));
        assert!(matches!(
            SoftwareEntry::new(name, "https://example.com".to_string(), vec![]),
            Err(ItemError::NoVersions)
        ));
    }

    #[test]
    fn find_is_case_insensitive_and_returns_first_match() {
        let catalog = Catalog::new(vec![
            entry("Tool", "https://first.example.com"),
            entry("TOOL", "https://second.example.com"),
        ]);

        let found = catalog.find("tool").unwrap();

        assert_eq!(found.link(), "https://first.example.com");
        assert!(catalog.find("other").is_none());
    }

    #[test]
    fn catalog_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
