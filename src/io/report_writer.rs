//! Report output
//!
//! Streams validation reports to a writer either as CSV rows (see
//! [`REPORT_HEADER`](crate::io::csv_format::REPORT_HEADER)) or as JSON Lines.

use crate::cli::OutputFormat;
use crate::core::ValidationReport;
use crate::io::csv_format::{report_to_csv_row, REPORT_HEADER};
use crate::types::PipelineError;
use std::io::Write;

/// Writer for validation reports in the selected output format
pub enum ReportWriter<'a> {
    Csv(csv::Writer<&'a mut dyn Write>),
    Json(&'a mut dyn Write),
}

impl<'a> ReportWriter<'a> {
    /// Create a writer; CSV output starts with the header row
    pub fn new(format: OutputFormat, output: &'a mut dyn Write) -> Result<Self, PipelineError> {
        match format {
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(output);
                writer.write_record(REPORT_HEADER)?;
                Ok(ReportWriter::Csv(writer))
            }
            OutputFormat::Json => Ok(ReportWriter::Json(output)),
        }
    }

    pub fn write(&mut self, report: &ValidationReport) -> Result<(), PipelineError> {
        match self {
            ReportWriter::Csv(writer) => writer.write_record(report_to_csv_row(report))?,
            ReportWriter::Json(output) => {
                serde_json::to_writer(&mut **output, report)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }

    /// Flush buffered output
    pub fn finish(self) -> Result<(), PipelineError> {
        match self {
            ReportWriter::Csv(mut writer) => writer.flush()?,
            ReportWriter::Json(output) => output.flush()?,
        }
        Ok(())
    }
}
