//! Asynchronous batch processing strategy
//!
//! This module provides an asynchronous, multi-threaded implementation of the
//! ProcessingStrategy trait. Records are read in batches and each batch is validated in
//! parallel across worker tasks.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchValidator (contiguous partitioning + tokio tasks)
//!     └── ReportWriter (CSV or JSON Lines output)
//! ```
//!
//! # Ordering
//!
//! Batches are processed one after another, and every batch is split into contiguous
//! chunks whose results are joined in order. Reports therefore come out in input order,
//! identical to the sync strategy's output.

use crate::cli::OutputFormat;
use crate::core::BatchValidator;
use crate::io::{AsyncReader, ReportWriter};
use crate::strategy::{ProcessingStrategy, ProcessingSummary};
use crate::types::PipelineError;
use std::io::Write;
use std::path::Path;
use tokio_util::compat::TokioAsyncReadCompatExt;
use tracing::{debug, info, warn};

/// Configuration for batch processing
///
/// Controls how records are batched and the number of worker threads
/// validating each batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of records per batch
    pub batch_size: usize,
    /// Maximum number of workers validating a batch concurrently
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

/// Largest accepted number of records per batch
pub const MAX_BATCH_SIZE: usize = 100_000;
/// Largest accepted number of worker threads
pub const MAX_CONCURRENT_BATCHES: usize = 256;

impl BatchConfig {
    /// Create a new BatchConfig
    ///
    /// Zero values are replaced with the defaults and values above [`MAX_BATCH_SIZE`] or
    /// [`MAX_CONCURRENT_BATCHES`] are clamped, both with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = match batch_size {
            0 => {
                warn!(
                    batch_size,
                    default = default.batch_size,
                    "Invalid batch size, using default"
                );
                default.batch_size
            }
            size if size > MAX_BATCH_SIZE => {
                warn!(batch_size, max = MAX_BATCH_SIZE, "Batch size too large, clamping");
                MAX_BATCH_SIZE
            }
            size => size,
        };

        let max_concurrent_batches = match max_concurrent_batches {
            0 => {
                warn!(
                    max_concurrent_batches,
                    default = default.max_concurrent_batches,
                    "Invalid max concurrent batches, using default"
                );
                default.max_concurrent_batches
            }
            count if count > MAX_CONCURRENT_BATCHES => {
                warn!(
                    max_concurrent_batches,
                    max = MAX_CONCURRENT_BATCHES,
                    "Max concurrent batches too large, clamping"
                );
                MAX_CONCURRENT_BATCHES
            }
            count => count,
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
///
/// # Configuration
///
/// The strategy accepts a BatchConfig with:
/// - `batch_size`: Number of records per batch (default: 1000)
/// - `max_concurrent_batches`: Number of worker threads (default: CPU cores)
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
    format: OutputFormat,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Run the batch pipeline on a multi-threaded tokio runtime
    ///
    /// The input is opened before any output is written, so a missing file leaves
    /// `output` untouched.
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ProcessingSummary, PipelineError> {
        // `BatchConfig` fields are public and may bypass `new`
        let workers = self
            .config
            .max_concurrent_batches
            .clamp(1, MAX_CONCURRENT_BATCHES);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(workers)
            .build()
            .map_err(|e| PipelineError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

        runtime.block_on(async {
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| PipelineError::open_failed(input_path, e))?;

            let mut reader = AsyncReader::new(file.compat());
            let validator = BatchValidator::new(workers);
            let mut writer = ReportWriter::new(self.format, output)?;
            let mut summary = ProcessingSummary::default();

            loop {
                let batch = reader.read_batch(self.config.batch_size.max(1)).await;
                if batch.is_empty() {
                    break;
                }

                debug!(records = batch.len(), "Validating batch");
                for report in validator.validate_batch(batch).await? {
                    summary.record(&report);
                    writer.write(&report)?;
                }
            }

            writer.finish()?;
            summary.skipped = reader.skipped();

            info!(
                valid = summary.valid,
                invalid = summary.invalid,
                skipped = summary.skipped,
                "Validation finished"
            );
            Ok(summary)
        })
    }
}
