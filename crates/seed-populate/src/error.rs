//! Error types for collection seeding.

use thiserror::Error;

/// Errors that can occur while setting up a seeding run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PopulateError {
    /// Batch size must be at least one document.
    #[error("Invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(u64),
}
