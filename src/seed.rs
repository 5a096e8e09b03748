//! Seeding orchestration: one task per record kind, joined at the end.

use crate::config::SeedConfig;
use anyhow::Context;
use rand::rngs::StdRng;
use seed_populate::{BatchPlan, RecordSeeder, SeedMetrics};
use seed_records::{seeded_rng, Movie, Record, RecordKind, User};
use solr_client::{mask_credentials, SolrClient};
use tokio::task::JoinHandle;

/// Per-kind results of a seeding run.
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    pub kinds: Vec<(RecordKind, SeedMetrics)>,
}

impl SeedSummary {
    /// Metrics for one kind, if it was seeded.
    pub fn get(&self, kind: RecordKind) -> Option<&SeedMetrics> {
        self.kinds.iter().find(|(k, _)| *k == kind).map(|(_, m)| m)
    }

    pub fn docs_sent(&self) -> u64 {
        self.kinds.iter().map(|(_, m)| m.docs_sent).sum()
    }

    pub fn failed_batches(&self) -> u64 {
        self.kinds.iter().map(|(_, m)| m.failed_batches).sum()
    }
}

/// Seed every configured kind concurrently and wait for all of them.
///
/// Failed batches are logged by the seeding tasks and never turn into an
/// error here; only setup problems and crashed tasks do.
pub async fn run_seed(config: &SeedConfig) -> anyhow::Result<SeedSummary> {
    let client = SolrClient::with_timeout(&config.solr_url, config.timeout)
        .context("Failed to create Solr client")?;

    let kinds: Vec<String> = config.kinds.iter().map(ToString::to_string).collect();
    tracing::info!(
        solr_master = %mask_credentials(&config.solr_url),
        kinds = ?kinds,
        batch_size = config.batch_size,
        "starting seeding"
    );

    let mut plans = Vec::with_capacity(config.kinds.len());
    for kind in &config.kinds {
        let plan = BatchPlan::new(config.total_for(*kind), config.batch_size)
            .with_context(|| format!("Invalid seeding plan for {kind}"))?;
        plans.push((*kind, plan));
    }

    if config.dry_run {
        for (kind, plan) in &plans {
            tracing::info!(
                collection = kind.collection(),
                url = %mask_credentials(&client.update_url(kind.collection())),
                total = plan.total(),
                batches = plan.batch_count(),
                "[DRY-RUN] would seed collection"
            );
        }
        tracing::info!(
            solr_master = %mask_credentials(client.base_url()),
            "[DRY-RUN] configuration validated, no documents sent"
        );
        return Ok(SeedSummary::default());
    }

    let mut handles = Vec::with_capacity(plans.len());
    for (kind, plan) in plans {
        handles.push((kind, spawn_kind(kind, plan, client.clone(), config.seed)));
    }

    let mut summary = SeedSummary::default();
    let mut crashed = Vec::new();
    for (kind, handle) in handles {
        match handle.await {
            Ok(metrics) => summary.kinds.push((kind, metrics)),
            Err(e) => {
                tracing::error!(collection = kind.collection(), error = %e, "seeding task crashed");
                crashed.push(kind.to_string());
            }
        }
    }

    if !crashed.is_empty() {
        anyhow::bail!("Seeding task(s) crashed: {}", crashed.join(", "));
    }

    tracing::info!(
        docs_sent = summary.docs_sent(),
        failed_batches = summary.failed_batches(),
        "seeding complete, exiting"
    );

    Ok(summary)
}

/// Start the seeding task for one kind with its own RNG stream.
fn spawn_kind(
    kind: RecordKind,
    plan: BatchPlan,
    client: SolrClient,
    seed: Option<u64>,
) -> JoinHandle<SeedMetrics> {
    let rng = seeded_rng(seed, kind.stream());

    match kind {
        RecordKind::Users => spawn_collection::<User>(client, plan, rng),
        RecordKind::Movies => spawn_collection::<Movie>(client, plan, rng),
    }
}

fn spawn_collection<T: Record>(
    client: SolrClient,
    plan: BatchPlan,
    mut rng: StdRng,
) -> JoinHandle<SeedMetrics> {
    let seeder = RecordSeeder::<T>::with_plan(client, plan);
    tokio::spawn(async move { seeder.run(&mut rng).await })
}
