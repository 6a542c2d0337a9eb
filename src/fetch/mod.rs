//! Catalog retrieval
//!
//! The checker only needs the raw catalog bytes; where they come from is
//! behind the [`CatalogSource`] trait.
//!
//! - [`http`]: HTTP(S) catalog source

pub mod http;

#[cfg(test)]
use mockall::automock;

use crate::check::query::Query;
use crate::config::USER_AGENT_PREFIX;
use crate::error::FetchError;

pub use http::HttpCatalogSource;

/// Trait for retrieving the raw catalog document
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the catalog document
    ///
    /// # Arguments
    /// * `user_agent` - Identifies the requesting software to the server
    async fn fetch(&self, user_agent: &str) -> Result<Vec<u8>, FetchError>;
}

/// Build the user agent string, naming the requesting software if known
pub fn user_agent(requester: Option<&Query>) -> String {
    match requester {
        Some(query) => format!("{} - {}", USER_AGENT_PREFIX, query),
        None => USER_AGENT_PREFIX.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_requester() {
        let query: Query = "PeakMaster@6.0a".parse().unwrap();

        assert_eq!(user_agent(Some(&query)), "update-check - PeakMaster 6.0a");
        assert_eq!(user_agent(None), "update-check");
    }
}
