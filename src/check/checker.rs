//! Update checks: catalog bytes plus queries to results
//!
//! The catalog is parsed once per call. Each query is then resolved against
//! the same immutable catalog. Degraded outcomes (a partially parsed catalog,
//! an unlisted software) are reported as [`Warning`]s next to the results;
//! fatal conditions are returned as [`CheckError`].

use tracing::{debug, info};

use crate::catalog::{Catalog, ParseOutcome, parse};
use crate::check::link::resolve_link;
use crate::check::query::Query;
use crate::check::resolver::{UpdateStatus, resolve};
use crate::error::{CheckError, Warning};
use crate::fetch::{CatalogSource, user_agent};
use crate::version::Version;

/// Result of an update check for one software
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub status: UpdateStatus,
    /// Newest known version; `None` if the status is `Unknown`
    pub latest_version: Option<Version>,
    /// Download link of the newest version; `None` if the status is `Unknown`
    pub link: Option<String>,
}

impl CheckResult {
    fn unknown() -> Self {
        Self {
            status: UpdateStatus::Unknown,
            latest_version: None,
            link: None,
        }
    }
}

/// Value of a successful check together with the warnings it raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked<T> {
    pub value: T,
    /// Distinct warnings in the order they were first raised
    pub warnings: Vec<Warning>,
}

impl<T> Checked<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, warning: Warning) {
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Check one software against a catalog document.
pub fn check_one(catalog_bytes: &[u8], query: &Query) -> Result<Checked<CheckResult>, CheckError> {
    let (catalog, outcome) = parse(catalog_bytes)?;

    let mut checked = Checked::new(evaluate(&catalog, query));
    if outcome.is_partial() {
        checked.warn(Warning::ListIncomplete);
    }
    if checked.value.status == UpdateStatus::Unknown {
        checked.warn(Warning::NotFound);
    }

    log_outcome(outcome, 1);

    Ok(checked)
}

/// Check several softwares against one catalog document.
///
/// The document is parsed once. Results follow the order of `queries`.
pub fn check_many(
    catalog_bytes: &[u8],
    queries: &[Query],
) -> Result<Checked<Vec<CheckResult>>, CheckError> {
    let (catalog, outcome) = parse(catalog_bytes)?;

    let mut results = Vec::new();
    results
        .try_reserve_exact(queries.len())
        .map_err(|_| CheckError::OutOfMemory)?;

    let mut checked = Checked::new(results);
    if outcome.is_partial() {
        checked.warn(Warning::ListIncomplete);
    }

    for query in queries {
        let result = evaluate(&catalog, query);
        if result.status == UpdateStatus::Unknown {
            checked.warn(Warning::NotFound);
        }
        checked.value.push(result);
    }

    log_outcome(outcome, queries.len());

    Ok(checked)
}

/// Fetch the catalog from `source` and check one software.
pub async fn check(
    source: &dyn CatalogSource,
    query: &Query,
) -> Result<Checked<CheckResult>, CheckError> {
    let bytes = source.fetch(&user_agent(Some(query))).await?;
    check_one(&bytes, query)
}

/// Fetch the catalog from `source` and check several softwares.
pub async fn check_many_from(
    source: &dyn CatalogSource,
    queries: &[Query],
) -> Result<Checked<Vec<CheckResult>>, CheckError> {
    let bytes = source.fetch(&user_agent(None)).await?;
    check_many(&bytes, queries)
}

/// Resolve a single query against an already parsed catalog
pub fn evaluate(catalog: &Catalog, query: &Query) -> CheckResult {
    let (status, latest) = resolve(catalog, query);
    if status == UpdateStatus::Unknown {
        return CheckResult::unknown();
    }

    match resolve_link(catalog, query.name.as_str()) {
        Some(link) => CheckResult {
            status,
            latest_version: Some(latest),
            link: Some(link.to_string()),
        },
        // resolve() found the entry, so the same lookup cannot fail
        None => CheckResult::unknown(),
    }
}

fn log_outcome(outcome: ParseOutcome, query_count: usize) {
    match outcome {
        ParseOutcome::Complete => debug!("Checked {} queries", query_count),
        ParseOutcome::PartialList { skipped } => info!(
            "Checked {} queries against a partial catalog ({} items skipped)",
            query_count, skipped
        ),
    }
}
