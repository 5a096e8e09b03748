//! Command-line interface for solr-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Full default run: 1M users and 1M movies in batches of 1000
//! SOLR_MASTER_URL=http://solr-master:8983 solr-seed
//!
//! # Reproducible smaller run with human-readable logs
//! solr-seed --solr-url http://localhost:8983 \
//!   --users 10000 --movies 5000 --batch-size 500 \
//!   --seed 42 --log-format text
//! ```
//!
//! Exits with status 1 when no Solr URL is configured. Failed batches are
//! logged and skipped and do not change the exit status.

use clap::Parser;
use seed_populate::SeedArgs;
use solr_seed::{init_logging, run_seed, LogFormat, SeedConfig};

#[derive(Parser)]
#[command(name = "solr-seed")]
#[command(about = "Bulk-load synthetic users and movies into Solr")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    seed: SeedArgs,

    /// Log output format
    #[arg(long, value_enum, env = "SEED_LOG_FORMAT", default_value = "json")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_format) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SeedConfig::from_args(&cli.seed)?;
    run_seed(&config).await?;
    Ok(())
}
