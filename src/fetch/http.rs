//! HTTP catalog source

use std::time::Duration;

use tracing::{info, warn};

use crate::config::{CheckerConfig, FetchConfig};
use crate::error::FetchError;
use crate::fetch::CatalogSource;

/// Catalog source downloading the document from a URL
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Creates a new source for `url`.
    ///
    /// Unless `allow_insecure` is set, only HTTPS URLs with valid certificates
    /// are accepted. Redirects are followed.
    pub fn new(url: &str, fetch: &FetchConfig, allow_insecure: bool) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(fetch.connect_timeout_ms))
            .timeout(Duration::from_millis(fetch.timeout_ms))
            .https_only(!allow_insecure)
            .danger_accept_invalid_certs(allow_insecure)
            .build()
            .map_err(|e| FetchError::Setup(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Creates a source from the checker configuration
    pub fn from_config(url: &str, config: &CheckerConfig) -> Result<Self, FetchError> {
        Self::new(url, &config.fetch, config.allow_insecure)
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self, user_agent: &str) -> Result<Vec<u8>, FetchError> {
        info!("Fetching catalog from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog server returned status {}: {}", status, self.url);
            return Err(FetchError::Http(status.as_u16()));
        }

        let body = response.bytes().await?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn source(url: &str) -> HttpCatalogSource {
        HttpCatalogSource::new(url, &FetchConfig::default(), true).unwrap()
    }

    #[tokio::test]
    async fn fetch_returns_body_and_sends_user_agent() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/updates.json")
            .match_header("user-agent", "update-check - Tool 1.0")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"software": []}"#)
            .create_async()
            .await;

        let source = source(&format!("{}/updates.json", server.url()));
        let body = source.fetch("update-check - Tool 1.0").await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, br#"{"software": []}"#.to_vec());
    }

    #[tokio::test]
    async fn fetch_follows_redirects() {
        let mut server = Server::new_async().await;
        let base_url = server.url();

        let moved = server
            .mock("GET", "/old.json")
            .with_status(301)
            .with_header("location", &format!("{}/new.json", base_url))
            .create_async()
            .await;
        let target = server
            .mock("GET", "/new.json")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let source = source(&format!("{}/old.json", base_url));
        let body = source.fetch("update-check").await.unwrap();

        moved.assert_async().await;
        target.assert_async().await;
        assert_eq!(body, b"{}".to_vec());
    }

    #[tokio::test]
    async fn fetch_returns_http_error_for_missing_document() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/updates.json")
            .with_status(404)
            .create_async()
            .await;

        let source = source(&format!("{}/updates.json", server.url()));
        let result = source.fetch("update-check").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::Http(404))));
    }

    #[tokio::test]
    async fn fetch_rejects_plain_http_unless_insecure_is_allowed() {
        let server = Server::new_async().await;

        let source = HttpCatalogSource::new(
            &format!("{}/updates.json", server.url()),
            &FetchConfig::default(),
            false,
        )
        .unwrap();
        let result = source.fetch("update-check").await;

        assert!(result.is_err());
    }
}
