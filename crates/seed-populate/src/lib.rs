//! Collection seeding for the solr-seed tool.
//!
//! This crate provides the generic "seed one collection" loop shared by every
//! record kind, the batch partitioning it runs on, and the CLI argument block
//! used by the `solr-seed` binary.
//!
//! # Example
//!
//! ```ignore
//! use seed_populate::RecordSeeder;
//! use seed_records::{seeded_rng, User};
//!
//! let client = SolrClient::new("http://localhost:8983")?;
//! let seeder = RecordSeeder::<User>::for_record(client, 10_000, 1000)?;
//! let metrics = seeder.run(&mut seeded_rng(Some(42), 0)).await;
//! println!("Sent {} docs in {:?}", metrics.docs_sent, metrics.total_duration);
//! ```

pub mod args;
pub mod batch;
pub mod error;
pub mod seeder;

pub use args::SeedArgs;
pub use batch::{Batch, BatchPlan};
pub use error::PopulateError;
pub use seeder::{CollectionSeeder, RecordSeeder, SeedMetrics, PROGRESS_INTERVAL};
