//! Minimal client for the Solr JSON update API.
//!
//! Documents are posted as a JSON array to
//! `<base>/solr/<collection>/update?commit=true`, so they become searchable as
//! soon as the request returns. The client makes exactly one request per
//! `submit` call and never retries.
//!
//! # Example
//!
//! ```ignore
//! let client = SolrClient::new("http://localhost:8983")?;
//! client.submit("users", &users).await?;
//! ```

pub mod client;
pub mod error;
pub mod url;

pub use client::{SolrClient, DEFAULT_TIMEOUT};
pub use error::SolrError;
pub use url::{mask_credentials, update_url};
