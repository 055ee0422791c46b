//! Processing strategy module for batch validation
//!
//! This module defines the Strategy pattern for complete validation pipelines, covering
//! CSV parsing, validation, redaction and report output. Different implementations
//! (synchronous, asynchronous batch) can be selected at runtime.

use crate::cli::{OutputFormat, StrategyType};
use crate::core::ValidationReport;
use crate::types::PipelineError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{
    AsyncProcessingStrategy, BatchConfig, MAX_BATCH_SIZE, MAX_CONCURRENT_BATCHES,
};
pub use sync::SyncProcessingStrategy;

/// Counts of processed records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    /// Records whose payout method passed validation
    pub valid: u64,
    /// Records with at least one field error
    pub invalid: u64,
    /// Records that could not be parsed and produced no report
    pub skipped: u64,
}

impl ProcessingSummary {
    pub fn record(&mut self, report: &ValidationReport) {
        if report.validation.is_valid() {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }
}

/// Processing strategy trait for complete validation pipelines
///
/// Rejected payout methods are regular output rows, and malformed CSV records are logged
/// and skipped; neither ends processing. An `Err` means the pipeline itself failed: the
/// input could not be opened, or output could not be written.
pub trait ProcessingStrategy: Send + Sync {
    /// Validate every record of `input_path` and write one report per record to `output`
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ProcessingSummary, PipelineError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is only used by the async strategy; `None` selects the defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
    format: OutputFormat,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(format)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, format))
        }
    }
}
