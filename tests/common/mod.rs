//! Shared helpers for solr-seed integration tests.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Router,
};
use std::process::Output;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// In-process stand-in for the Solr update endpoint.
#[derive(Clone)]
pub struct MockSolr {
    pub base_url: String,
    status: StatusCode,
    delay: Duration,
    collections: Arc<Mutex<Vec<String>>>,
}

impl MockSolr {
    /// Start a mock that answers every update with `status` after `delay`.
    pub async fn start(status: StatusCode, delay: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mock = MockSolr {
            base_url: format!("http://{}", listener.local_addr().unwrap()),
            status,
            delay,
            collections: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/solr/:collection/update", post(update))
            .with_state(mock.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        mock
    }

    /// Number of update requests received for `collection`.
    pub fn requests_for(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == collection)
            .count()
    }

    pub fn total_requests(&self) -> usize {
        self.collections.lock().unwrap().len()
    }
}

async fn update(
    State(mock): State<MockSolr>,
    Path(collection): Path<String>,
    _body: String,
) -> StatusCode {
    mock.collections.lock().unwrap().push(collection);
    tokio::time::sleep(mock.delay).await;
    mock.status
}

/// Execute the solr-seed binary with a clean seeding environment.
pub async fn execute_solr_seed(args: &[&str], solr_url: Option<&str>) -> Output {
    let mut command = tokio::process::Command::new(env!("CARGO_BIN_EXE_solr-seed"));
    command
        .args(args)
        .env("RUST_LOG", "info")
        .env_remove("SOLR_MASTER_URL")
        .env_remove("SEED_TOTAL_USERS")
        .env_remove("SEED_TOTAL_MOVIES")
        .env_remove("SEED_BATCH_SIZE")
        .env_remove("SEED_RANDOM_SEED")
        .env_remove("SEED_LOG_FORMAT");
    if let Some(url) = solr_url {
        command.env("SOLR_MASTER_URL", url);
    }
    command.output().await.unwrap()
}

/// Parse the JSON log lines written to stdout.
pub fn log_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line).unwrap_or_else(|e| panic!("not a JSON log line ({e}): {line}"))
        })
        .collect()
}

/// Log events whose message equals `message`.
pub fn events<'a>(lines: &'a [serde_json::Value], message: &str) -> Vec<&'a serde_json::Value> {
    lines
        .iter()
        .filter(|line| line["message"] == message)
        .collect()
}

/// Verify the process exited with `code`, dumping its output otherwise.
pub fn assert_exit_code(output: &Output, code: i32) {
    if output.status.code() != Some(code) {
        panic!(
            "expected exit code {code}, got {:?}\nStdout: {}\nStderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
