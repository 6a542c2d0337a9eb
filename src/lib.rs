//! Software update checks against a published release catalog
//!
//! ```text
//! bytes ──▶ catalog::parse ──▶ Catalog ──▶ check::resolve ──▶ status + latest
//!                                   │
//!                                   └──────▶ check::resolve_link ──▶ link
//! ```
//!
//! The catalog is fetched through a [`fetch::CatalogSource`]; everything after
//! that is a pure function of the catalog bytes and the queries.

pub mod catalog;
pub mod check;
pub mod config;
pub mod error;
pub mod fetch;
pub mod version;

pub use catalog::{Catalog, ParseOutcome, Severity};
pub use check::{CheckResult, Checked, Query, UpdateStatus, check_many, check_one};
pub use error::{CheckError, FetchError, Warning};
pub use version::Version;
