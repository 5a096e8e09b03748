//! Error types for the Solr client.

use thiserror::Error;

/// Errors that can occur while submitting documents to Solr.
#[derive(Error, Debug)]
pub enum SolrError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to serialize documents: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Solr returned status {status} for '{url}': {body}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },
}

impl SolrError {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            SolrError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
