//! Batch loop that fills one Solr collection with generated documents.

use crate::batch::BatchPlan;
use crate::error::PopulateError;
use rand::rngs::StdRng;
use seed_records::Record;
use serde::Serialize;
use solr_client::SolrClient;
use std::marker::PhantomData;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// A progress line is logged for every this many batches.
pub const PROGRESS_INTERVAL: u64 = 10;

/// Metrics from seeding one collection.
#[derive(Debug, Clone, Default)]
pub struct SeedMetrics {
    /// Documents accepted by Solr.
    pub docs_sent: u64,
    /// Documents in batches that failed and were dropped.
    pub docs_failed: u64,
    /// Number of batches attempted.
    pub batch_count: u64,
    /// Number of batches that failed.
    pub failed_batches: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating documents.
    pub generation_duration: Duration,
    /// Time spent waiting on Solr.
    pub upload_duration: Duration,
}

impl SeedMetrics {
    /// Calculate accepted documents per second.
    pub fn docs_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.docs_sent as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Seeds a single collection in fixed-size batches.
///
/// Each batch is generated fresh, posted once and then discarded. A failed
/// batch is logged and skipped; it is never retried or re-queued.
pub struct CollectionSeeder<T, F> {
    client: SolrClient,
    collection: String,
    plan: BatchPlan,
    generator: F,
    _record: PhantomData<fn() -> T>,
}

impl<T, F> CollectionSeeder<T, F>
where
    T: Serialize,
    F: FnMut(&mut StdRng) -> T,
{
    /// Create a seeder that writes `total` documents from `generator` to `collection`.
    pub fn new(
        client: SolrClient,
        collection: impl Into<String>,
        total: u64,
        batch_size: u64,
        generator: F,
    ) -> Result<Self, PopulateError> {
        let plan = BatchPlan::new(total, batch_size)?;
        Ok(Self::from_plan(client, collection, plan, generator))
    }

    /// Create a seeder from an already validated plan.
    pub fn from_plan(
        client: SolrClient,
        collection: impl Into<String>,
        plan: BatchPlan,
        generator: F,
    ) -> Self {
        Self {
            client,
            collection: collection.into(),
            plan,
            generator,
            _record: PhantomData,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn plan(&self) -> &BatchPlan {
        &self.plan
    }

    /// Run every batch to completion and return the collected metrics.
    pub async fn run(mut self, rng: &mut StdRng) -> SeedMetrics {
        let start_time = Instant::now();
        let mut metrics = SeedMetrics::default();
        let collection = self.collection.as_str();

        debug!(
            collection,
            total = self.plan.total(),
            batch_size = self.plan.batch_size(),
            batches = self.plan.batch_count(),
            "seeding collection"
        );

        let capacity = self.plan.batch_size().min(self.plan.total()) as usize;
        let mut docs: Vec<T> = Vec::with_capacity(capacity);
        let mut generation_time = Duration::ZERO;
        let mut upload_time = Duration::ZERO;

        for batch in self.plan.batches() {
            let gen_start = Instant::now();
            docs.clear();
            docs.extend((0..batch.len).map(|_| (self.generator)(rng)));
            generation_time += gen_start.elapsed();

            let upload_start = Instant::now();
            let result = self.client.submit(collection, &docs).await;
            upload_time += upload_start.elapsed();

            metrics.batch_count += 1;
            match result {
                Ok(()) => {
                    metrics.docs_sent += batch.len;
                    if batch.index % PROGRESS_INTERVAL == 0 {
                        info!(
                            collection,
                            batch_start = batch.start,
                            batch_size = batch.len,
                            "seeded batch"
                        );
                    }
                }
                Err(e) => {
                    metrics.failed_batches += 1;
                    metrics.docs_failed += batch.len;
                    error!(
                        collection,
                        error = %e,
                        batch_start = batch.start,
                        "failed to post batch"
                    );
                }
            }
        }

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.upload_duration = upload_time;

        let duration_ms = metrics.total_duration.as_millis() as u64;
        let generation_ms = metrics.generation_duration.as_millis() as u64;
        let upload_ms = metrics.upload_duration.as_millis() as u64;
        info!(
            collection,
            docs_sent = metrics.docs_sent,
            docs_failed = metrics.docs_failed,
            failed_batches = metrics.failed_batches,
            duration_ms,
            generation_ms,
            upload_ms,
            docs_per_second = metrics.docs_per_second(),
            "finished seeding collection"
        );

        metrics
    }
}

/// Seeder driven by a record type's own generator.
pub type RecordSeeder<T> = CollectionSeeder<T, fn(&mut StdRng) -> T>;

impl<T: Record> RecordSeeder<T> {
    /// Create a seeder for a record type, writing to its default collection.
    pub fn for_record(
        client: SolrClient,
        total: u64,
        batch_size: u64,
    ) -> Result<Self, PopulateError> {
        Ok(Self::with_plan(client, BatchPlan::new(total, batch_size)?))
    }

    /// Same as [`RecordSeeder::for_record`] with an already validated plan.
    pub fn with_plan(client: SolrClient, plan: BatchPlan) -> Self {
        Self::from_plan(client, T::KIND.collection(), plan, T::random::<StdRng>)
    }
}
