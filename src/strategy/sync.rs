//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. Records are streamed
//! one at a time from `SyncReader`, evaluated into a `ValidationReport` and written
//! immediately, so memory use does not grow with the input size.

use crate::cli::OutputFormat;
use crate::core::ValidationReport;
use crate::io::{ReportWriter, SyncReader};
use crate::strategy::{ProcessingStrategy, ProcessingSummary};
use crate::types::PipelineError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use payout_method_validator::cli::OutputFormat;
/// use payout_method_validator::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
///
/// let strategy = SyncProcessingStrategy::new(OutputFormat::Csv);
/// let mut output = std::io::stdout();
///
/// strategy.process(Path::new("payout_methods.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy {
    format: OutputFormat,
}

impl SyncProcessingStrategy {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ProcessingSummary, PipelineError> {
        let reader = SyncReader::new(input_path)?;
        let mut writer = ReportWriter::new(self.format, output)?;
        let mut summary = ProcessingSummary::default();

        for result in reader {
            match result {
                Ok(record) => {
                    let report = ValidationReport::evaluate(&record);
                    summary.record(&report);
                    writer.write(&report)?;
                }
                Err(error) => {
                    warn!(%error, "Skipping malformed record");
                    summary.skipped += 1;
                }
            }
        }

        writer.finish()?;

        info!(
            valid = summary.valid,
            invalid = summary.invalid,
            skipped = summary.skipped,
            "Validation finished"
        );
        Ok(summary)
    }
}
