//! Version model: major/minor numbers plus a short revision tag
//!
//! Ordering compares `major`, then `minor`, then the revision tag
//! case-insensitively. A tag that ends earlier sorts before a longer tag that
//! shares its prefix, so `1.0` < `1.0a` < `1.0b` < `1.0b2` < `1.1`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::REVISION_MAX_LEN;
use crate::error::CheckError;

/// Terminates a revision tag. Bytes after it are neither checked nor kept.
const PAD: u8 = b'\0';

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)(.*)$").expect("version pattern is valid"));

/// Check whether a revision tag is well formed.
///
/// The empty tag is valid. Otherwise the tag may hold at most
/// [`REVISION_MAX_LEN`] bytes, the first must be an ASCII letter and the rest
/// ASCII letters or digits. A NUL byte ends the tag early.
pub fn is_revision_valid(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    if bytes.len() > REVISION_MAX_LEN {
        return false;
    }

    let Some((&first, rest)) = bytes.split_first() else {
        return true;
    };
    if first == PAD {
        return true;
    }
    if !first.is_ascii_alphabetic() {
        return false;
    }

    rest.iter()
        .take_while(|&&b| b != PAD)
        .all(u8::is_ascii_alphanumeric)
}

/// Bounded revision tag such as `a`, `rc1` or the empty tag
#[derive(Debug, Clone, Default)]
pub struct Revision(String);

impl Revision {
    pub fn new(tag: &str) -> Result<Self, CheckError> {
        if !is_revision_valid(tag) {
            return Err(CheckError::InvalidArgument(format!(
                "invalid revision tag {:?}",
                tag
            )));
        }

        let end = tag.find(PAD as char).unwrap_or(tag.len());
        Ok(Self(tag[..end].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn folded(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl PartialEq for Revision {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Revision {}

impl Ord for Revision {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl PartialOrd for Revision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Revision {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.folded() {
            state.write_u8(b);
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Software version
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub revision: Revision,
}

impl Version {
    pub fn new(major: u32, minor: u32, revision: &str) -> Result<Self, CheckError> {
        Ok(Self {
            major,
            minor,
            revision: Revision::new(revision)?,
        })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then_with(|| self.revision.cmp(&other.revision))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.major, self.minor, self.revision)
    }
}

/// Parses `MAJOR.MINOR[REVISION]`, e.g. `1.2`, `1.2a`, `0.10rc1`
impl FromStr for Version {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CheckError::InvalidArgument(format!("invalid version {:?}", s));

        let caps = VERSION_PATTERN.captures(s.trim()).ok_or_else(invalid)?;
        let major = caps[1].parse().map_err(|_| invalid())?;
        let minor = caps[2].parse().map_err(|_| invalid())?;

        Version::new(major, minor, &caps[3])
    }
}
