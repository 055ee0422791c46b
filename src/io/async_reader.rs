//! Asynchronous CSV reader with batch interface
//!
//! Provides batched reading of payout records for the async strategy.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of PayoutRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{PayoutRecord, PipelineError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Upper bound on records preallocated per batch; larger batches grow on demand
const MAX_PREALLOCATED_RECORDS: usize = 1024;

/// Asynchronous CSV reader
///
/// Numbers rows the same way as [`SyncReader`](crate::io::SyncReader), so both strategies
/// report identical row numbers for the same input.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    row: u64,
    skipped: u64,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            row: 0,
            skipped: 0,
        }
    }

    /// Read up to `batch_size` payout records
    ///
    /// Records that fail to parse are logged and skipped; they still consume a row number.
    /// Returns an empty vector once the input is exhausted.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<PayoutRecord> {
        let mut batch = Vec::with_capacity(batch_size.min(MAX_PREALLOCATED_RECORDS));
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => {
                    self.row += 1;
                    batch.push(convert_csv_record(self.row, csv_record));
                }
                Some(Err(e)) => {
                    self.row += 1;
                    self.skipped += 1;
                    let error = PipelineError::from(e);
                    warn!(row = self.row, %error, "Skipping malformed record");
                }
                None => break,
            }
        }

        batch
    }

    /// Number of records skipped so far because they failed to parse
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let csv_content = "type,email\n\
            paypal,a@example.com\n\
            wise,b@example.com\n\
            paypal,c@example.com\n";
        let mut async_reader = AsyncReader::new(Cursor::new(csv_content.as_bytes()));

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].row, 1);
        assert_eq!(batch[0].details["email"], "a@example.com");
        assert_eq!(batch[1].row, 2);
        assert_eq!(batch[1].method_type, "wise");

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].row, 3);

        assert!(async_reader.read_batch(2).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_huge_batch_size() {
        let csv_content = "type,email\nwise,a@example.com\n";
        let mut async_reader = AsyncReader::new(Cursor::new(csv_content.as_bytes()));

        let batch = async_reader.read_batch(usize::MAX).await;
        assert_eq!(batch.len(), 1);
        assert!(async_reader.read_batch(usize::MAX).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let mut async_reader = AsyncReader::new(Cursor::new("type,email\n".as_bytes()));
        assert!(async_reader.read_batch(10).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_skips_malformed_record() {
        let csv_content: &[u8] = b"type,email\npaypal,\xff@example.com\nwise,b@example.com\n";
        let mut async_reader = AsyncReader::new(Cursor::new(csv_content));

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].row, 2);
        assert_eq!(batch[0].method_type, "wise");
        assert_eq!(async_reader.skipped(), 1);
    }

    #[tokio::test]
    async fn test_async_reader_whitespace_and_unknown_type() {
        let csv_content = "type,account_id\n  venmo  ,  acct_x  \n";
        let mut async_reader = AsyncReader::new(Cursor::new(csv_content.as_bytes()));

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].method_type, "venmo");
        assert_eq!(batch[0].details["account_id"], "acct_x");
    }
}
