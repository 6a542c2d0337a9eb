//! Update status resolution
//!
//! The newest release decides the target version, while the urgency is the
//! highest severity among all releases newer than the installed version. A
//! critical fix three releases back still makes the update required even if
//! the newest release only adds features.

use tracing::debug;

use crate::catalog::{Catalog, Severity};
use crate::check::query::Query;
use crate::version::Version;

/// Update status of a software
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Software is not listed in the catalog
    Unknown,
    /// No newer release exists
    UpToDate,
    /// A newer release adds features only
    UpdateAvailable,
    /// A newer release contains important fixes
    UpdateRecommended,
    /// A newer release contains critical fixes
    UpdateRequired,
}

impl UpdateStatus {
    /// Returns the string representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateStatus::Unknown => "unknown",
            UpdateStatus::UpToDate => "up to date",
            UpdateStatus::UpdateAvailable => "update available",
            UpdateStatus::UpdateRecommended => "update recommended",
            UpdateStatus::UpdateRequired => "update required",
        }
    }

    fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Feature => UpdateStatus::UpdateAvailable,
            Severity::Bugfix => UpdateStatus::UpdateRecommended,
            Severity::Critical => UpdateStatus::UpdateRequired,
        }
    }
}

impl std::fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determine the update status of the queried software.
///
/// Returns the status and the newest known version. When the software is
/// not listed or already up to date, the version is the queried one.
pub fn resolve(catalog: &Catalog, query: &Query) -> (UpdateStatus, Version) {
    let Some(entry) = catalog.find(query.name.as_str()) else {
        debug!("{} is not listed in the catalog", query.name);
        return (UpdateStatus::Unknown, query.current.clone());
    };

    let mut latest = &query.current;
    let mut severity = Severity::Feature;
    let mut update_found = false;

    for release in entry.releases() {
        if release.version > *latest {
            update_found = true;
            latest = &release.version;
        }
        if release.version > query.current {
            severity = severity.max(release.severity);
        }
    }

    let status = if update_found {
        UpdateStatus::from_severity(severity)
    } else {
        UpdateStatus::UpToDate
    };

    debug!("{}: {} (latest {})", query.name, status, latest);

    (status, latest.clone())
}
