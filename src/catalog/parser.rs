//! Catalog document parser
//!
//! The document is a JSON object holding a `software` array:
//!
//! ```json
//! {
//!   "software": [
//!     {
//!       "name": "PeakMaster",
//!       "link": "https://example.com/peakmaster",
//!       "versions": [
//!         { "major": 6, "minor": 0, "revision": "a", "severity": 1 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! A document of any other shape is rejected as a whole. Individual items are
//! validated independently: a bad item is logged and skipped.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::error::ItemError;
use crate::catalog::types::{Catalog, ReleasedVersion, Severity, SoftwareEntry};
use crate::error::CheckError;
use crate::version::{SoftwareName, Version};

/// How completely the catalog document was processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every item was accepted
    Complete,
    /// Some items were skipped; the catalog holds the rest
    PartialList { skipped: usize },
}

impl ParseOutcome {
    pub fn is_partial(&self) -> bool {
        matches!(self, ParseOutcome::PartialList { .. })
    }
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    software: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawSoftware {
    name: String,
    link: String,
    versions: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawVersion {
    major: u32,
    minor: u32,
    revision: String,
    severity: u64,
}

/// Parse a catalog document.
///
/// # Returns
/// * `Ok((catalog, outcome))` - At least one item was usable
/// * `Err(CheckError::MalformedCatalog)` - The document is not a catalog, or
///   no item in it is usable
/// * `Err(CheckError::OutOfMemory)` - The entry list could not be allocated
pub fn parse(bytes: &[u8]) -> Result<(Catalog, ParseOutcome), CheckError> {
    let raw: RawCatalog =
        serde_json::from_slice(bytes).map_err(|e| CheckError::MalformedCatalog(e.to_string()))?;

    let mut entries = Vec::new();
    entries
        .try_reserve_exact(raw.software.len())
        .map_err(|_| CheckError::OutOfMemory)?;

    let mut skipped = 0;
    for (index, item) in raw.software.iter().enumerate() {
        match parse_item(item) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!("Skipping catalog item #{}: {}", index, e);
                skipped += 1;
            }
        }
    }

    if entries.is_empty() {
        return Err(CheckError::MalformedCatalog(format!(
            "no usable software entries ({} skipped)",
            skipped
        )));
    }

    debug!(
        "Parsed catalog with {} entries, {} skipped",
        entries.len(),
        skipped
    );

    let outcome = if skipped == 0 {
        ParseOutcome::Complete
    } else {
        ParseOutcome::PartialList { skipped }
    };

    Ok((Catalog::new(entries), outcome))
}

fn parse_item(item: &Value) -> Result<SoftwareEntry, ItemError> {
    let raw = RawSoftware::deserialize(item)?;

    let name = SoftwareName::new(&raw.name).map_err(|_| ItemError::InvalidName(raw.name))?;

    let mut releases = Vec::new();
    releases
        .try_reserve_exact(raw.versions.len())
        .map_err(|_| ItemError::OutOfMemory)?;

    for (index, value) in raw.versions.iter().enumerate() {
        releases.push(parse_release(index, value)?);
    }

    SoftwareEntry::new(name, raw.link, releases)
}

fn parse_release(index: usize, value: &Value) -> Result<ReleasedVersion, ItemError> {
    let raw = RawVersion::deserialize(value)
        .map_err(|source| ItemError::MalformedVersion { index, source })?;

    let severity = Severity::try_from(raw.severity)
        .map_err(|severity| ItemError::InvalidSeverity { index, severity })?;
    let version = Version::new(raw.major, raw.minor, &raw.revision).map_err(|_| {
        ItemError::InvalidRevision {
            index,
            revision: raw.revision,
        }
    })?;

    Ok(ReleasedVersion { version, severity })
}
