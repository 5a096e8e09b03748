//! HTTP client for the Solr JSON update endpoint.

use crate::error::SolrError;
use crate::url::{mask_credentials, update_url};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Timeout applied to every update request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of characters of an error response body kept for diagnostics.
const MAX_ERROR_BODY: usize = 512;

/// Client that posts document batches to Solr.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SolrClient {
    http: Client,
    base_url: String,
}

impl SolrClient {
    /// Create a client for the Solr instance at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SolrError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SolrError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SolrError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Base URL this client was created with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Update URL for `collection`.
    pub fn update_url(&self, collection: &str) -> String {
        update_url(&self.base_url, collection)
    }

    /// Post `docs` to `collection` as a single JSON array and commit.
    ///
    /// Any status outside 200..300 is an error. Nothing is retried.
    pub async fn submit<T: Serialize>(&self, collection: &str, docs: &[T]) -> Result<(), SolrError> {
        let body = serde_json::to_vec(docs)?;
        let url = self.update_url(collection);

        tracing::debug!(
            collection,
            docs = docs.len(),
            bytes = body.len(),
            "posting documents to solr"
        );

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|source| SolrError::Request {
                url: mask_credentials(&url),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            // The body is only diagnostic; an unreadable body must not hide the status.
            let body = response.text().await.unwrap_or_default();
            return Err(SolrError::Status {
                status,
                url: mask_credentials(&url),
                body: body.trim().chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_update_url() {
        let client = SolrClient::new("http://localhost:8983/").unwrap();

        assert_eq!(client.base_url(), "http://localhost:8983/");
        assert_eq!(
            client.update_url("movies"),
            "http://localhost:8983/solr/movies/update?commit=true"
        );
    }
}
