//! Partitioning of a document count into fixed-size batches.

use crate::error::PopulateError;

/// One batch of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// Position of the batch in the run, starting at 0.
    pub index: u64,
    /// Offset of the first document of the batch.
    pub start: u64,
    /// Number of documents in the batch.
    pub len: u64,
}

/// Splits `total` documents into consecutive batches of `batch_size`.
///
/// Every batch is full except possibly the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    total: u64,
    batch_size: u64,
}

impl BatchPlan {
    pub fn new(total: u64, batch_size: u64) -> Result<Self, PopulateError> {
        if batch_size == 0 {
            return Err(PopulateError::InvalidBatchSize(batch_size));
        }
        Ok(Self { total, batch_size })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Number of batches in the plan.
    pub fn batch_count(&self) -> u64 {
        self.total.div_ceil(self.batch_size)
    }

    /// Iterate over the batches in order.
    pub fn batches(&self) -> impl Iterator<Item = Batch> {
        let BatchPlan { total, batch_size } = *self;
        (0..self.batch_count()).map(move |index| {
            let start = index * batch_size;
            Batch {
                index,
                start,
                len: batch_size.min(total - start),
            }
        })
    }
}
