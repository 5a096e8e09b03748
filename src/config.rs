//! Validated runtime configuration.

use seed_populate::SeedArgs;
use seed_records::RecordKind;
use solr_client::DEFAULT_TIMEOUT;
use std::time::Duration;

/// Environment variable holding the Solr base URL.
pub const SOLR_URL_ENV: &str = "SOLR_MASTER_URL";

/// Everything a seeding run needs, checked up front.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub solr_url: String,
    pub kinds: Vec<RecordKind>,
    pub total_users: u64,
    pub total_movies: u64,
    pub batch_size: u64,
    pub seed: Option<u64>,
    pub dry_run: bool,
    pub timeout: Duration,
}

impl SeedConfig {
    /// Build the configuration from parsed CLI arguments.
    ///
    /// Fails when no Solr URL was given, or the one given is blank.
    pub fn from_args(args: &SeedArgs) -> anyhow::Result<Self> {
        let solr_url = match args.solr_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => anyhow::bail!("{SOLR_URL_ENV} is not set"),
        };

        Ok(Self {
            solr_url,
            kinds: args.selected_kinds(),
            total_users: args.total_users,
            total_movies: args.total_movies,
            batch_size: args.batch_size,
            seed: args.seed,
            dry_run: args.dry_run,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Number of documents to generate for `kind`.
    pub fn total_for(&self, kind: RecordKind) -> u64 {
        match kind {
            RecordKind::Users => self.total_users,
            RecordKind::Movies => self.total_movies,
        }
    }
}
