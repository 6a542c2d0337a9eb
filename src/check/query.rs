//! Caller-supplied update queries

use std::fmt;
use std::str::FromStr;

use crate::error::CheckError;
use crate::version::{SoftwareName, Version};

/// Request to check one software's installed version against the catalog
///
/// Both parts are validated on construction, so a `Query` never reaches the
/// catalog with a bad name or revision tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: SoftwareName,
    pub current: Version,
}

impl Query {
    pub fn new(name: &str, major: u32, minor: u32, revision: &str) -> Result<Self, CheckError> {
        Ok(Self {
            name: SoftwareName::new(name)?,
            current: Version::new(major, minor, revision)?,
        })
    }
}

/// Parses `NAME@VERSION`, e.g. `PeakMaster@6.0a`
impl FromStr for Query {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, version) = s.rsplit_once('@').ok_or_else(|| {
            CheckError::InvalidArgument(format!("expected NAME@VERSION, got {:?}", s))
        })?;

        Ok(Self {
            name: SoftwareName::new(name)?,
            current: version.parse()?,
        })
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_builds_validated_query() {
        let query = Query::new("PeakMaster", 6, 0, "a").unwrap();

        assert_eq!(query.name.as_str(), "PeakMaster");
        assert_eq!(query.current, Version::new(6, 0, "a").unwrap());
    }

    #[rstest]
    #[case::digit_first_revision("tool", "1bad")]
    #[case::long_revision("tool", "abcde")]
    #[case::empty_name("", "")]
    fn new_rejects_invalid_input(#[case] name: &str, #[case] revision: &str) {
        assert!(matches!(
            Query::new(name, 1, 0, revision),
            Err(CheckError::InvalidArgument(_))
        ));
    }

    #[rstest]
    #[case("tool@1.2", "tool", "1.2")]
    #[case("my@tool@0.9rc", "my@tool", "0.9rc")]
    fn from_str_splits_name_and_version(
        #[case] input: &str,
        #[case] name: &str,
        #[case] version: &str,
    ) {
        let query: Query = input.parse().unwrap();

        assert_eq!(query.name.as_str(), name);
        assert_eq!(query.current.to_string(), version);
    }

    #[rstest]
    #[case("tool")]
    #[case("@1.0")]
    #[case("tool@")]
    #[case("tool@1.1bad!")]
    fn from_str_rejects_invalid_input(#[case] input: &str) {
        assert!(input.parse::<Query>().is_err());
    }
}
