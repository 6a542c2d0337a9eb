//! Distribution link lookup

use crate::catalog::Catalog;

/// Look up the distribution link of a listed software.
///
/// Uses the same case-insensitive, first-match lookup as
/// [`resolve`](crate::check::resolver::resolve). Only meaningful once the
/// software is known to be listed; returns `None` otherwise.
pub fn resolve_link<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a str> {
    catalog.find(name).map(|entry| entry.link())
}
