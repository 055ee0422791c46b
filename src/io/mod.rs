//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report rows)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `report_writer` - CSV or JSON Lines report output

pub mod async_reader;
pub mod csv_format;
pub mod report_writer;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, report_to_csv_row, CsvRecord, REPORT_HEADER};
pub use report_writer::ReportWriter;
pub use sync_reader::SyncReader;
