//! CLI argument definitions for seeding.

use clap::Args;
use seed_records::RecordKind;

/// Arguments controlling what is generated and where it is sent.
#[derive(Args, Clone, Debug)]
pub struct SeedArgs {
    /// Base URL of the Solr master (e.g. http://solr-master:8983)
    #[arg(long, env = "SOLR_MASTER_URL")]
    pub solr_url: Option<String>,

    /// Number of user documents to generate
    #[arg(long = "users", env = "SEED_TOTAL_USERS", default_value = "1000000")]
    pub total_users: u64,

    /// Number of movie documents to generate
    #[arg(long = "movies", env = "SEED_TOTAL_MOVIES", default_value = "1000000")]
    pub total_movies: u64,

    /// Documents per update request
    #[arg(
        long,
        env = "SEED_BATCH_SIZE",
        default_value = "1000",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub batch_size: u64,

    /// Random seed for reproducible documents (default: seeded from OS entropy)
    #[arg(long, env = "SEED_RANDOM_SEED")]
    pub seed: Option<u64>,

    /// Record kinds to seed (comma-separated, empty = users and movies)
    #[arg(long, value_delimiter = ',')]
    pub kinds: Vec<RecordKind>,

    /// Dry-run mode: log the seeding plan without sending any documents
    #[arg(long)]
    pub dry_run: bool,
}

impl SeedArgs {
    /// Kinds to seed, without duplicates, in the order given.
    pub fn selected_kinds(&self) -> Vec<RecordKind> {
        if self.kinds.is_empty() {
            return RecordKind::ALL.to_vec();
        }
        let mut kinds = Vec::with_capacity(self.kinds.len());
        for kind in &self.kinds {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }
}
