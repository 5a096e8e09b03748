//! solr-seed library
//!
//! Bulk-loads synthetic `users` and `movies` documents into Solr through the
//! JSON update API. Each record kind is seeded by its own task; the tasks share
//! nothing and are joined once at the end.
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed one million users and one million movies
//! SOLR_MASTER_URL=http://solr-master:8983 solr-seed
//!
//! # Small reproducible run against a local Solr, users only
//! solr-seed --solr-url http://localhost:8983 --users 5000 --kinds users --seed 42
//!
//! # Show what would be sent without sending anything
//! solr-seed --solr-url http://localhost:8983 --dry-run --log-format text
//! ```

pub mod config;
pub mod logging;
pub mod seed;

pub use config::SeedConfig;
pub use logging::{init_logging, LogFormat};
pub use seed::{run_seed, SeedSummary};
