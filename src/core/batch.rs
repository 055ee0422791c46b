//! Concurrent batch validation for the async strategy
//!
//! Validation is pure, so a batch can be split into contiguous chunks and evaluated on
//! separate tokio tasks with no shared state. Chunks are joined in order, which keeps the
//! reports in input order.

use crate::core::ValidationReport;
use crate::types::{PayoutRecord, PipelineError};
use tracing::error;

/// Splits batches across up to `workers` concurrent tasks
#[derive(Debug, Clone)]
pub struct BatchValidator {
    workers: usize,
}

impl BatchValidator {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Split a batch into at most `workers` contiguous chunks of near-equal size
    ///
    /// Concatenating the chunks yields the original batch.
    pub fn partition(&self, batch: Vec<PayoutRecord>) -> Vec<Vec<PayoutRecord>> {
        let chunk_size = batch.len().div_ceil(self.workers).max(1);
        let mut chunks = Vec::with_capacity(self.workers.min(batch.len()));
        let mut records = batch.into_iter().peekable();

        while records.peek().is_some() {
            chunks.push(records.by_ref().take(chunk_size).collect());
        }

        chunks
    }

    /// Validate every record of a batch, returning reports in input order
    pub async fn validate_batch(
        &self,
        batch: Vec<PayoutRecord>,
    ) -> Result<Vec<ValidationReport>, PipelineError> {
        let capacity = batch.len();

        let tasks: Vec<_> = self
            .partition(batch)
            .into_iter()
            .map(|chunk| {
                tokio::spawn(async move {
                    chunk
                        .iter()
                        .map(ValidationReport::evaluate)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut reports = Vec::with_capacity(capacity);
        for task in tasks {
            match task.await {
                Ok(chunk_reports) => reports.extend(chunk_reports),
                Err(e) => {
                    error!(error = %e, "Validation task failed");
                    return Err(PipelineError::runtime(format!("Validation task failed: {}", e)));
                }
            }
        }

        Ok(reports)
    }
}
