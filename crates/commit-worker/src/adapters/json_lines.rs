//! Newline-delimited JSON transfer source.
//!
//! Each non-blank line is one `TransferRecord` as emitted by the chain-event
//! decoder. Lines that fail to decode are skipped and counted; decoding
//! errors never reach the commit path.

use async_trait::async_trait;
use shared_types::TransferRecord;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::warn;

use crate::domain::SourceError;
use crate::ports::TransferSource;

/// `TransferSource` over any buffered async reader (file, stdin, socket).
pub struct JsonLinesSource<R> {
    lines: Lines<R>,
    line_no: usize,
    skipped: usize,
}

impl<R: AsyncBufRead + Unpin + Send> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            skipped: 0,
        }
    }

    /// Number of malformed lines skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> TransferSource for JsonLinesSource<R> {
    async fn next_batch(&mut self, max: usize) -> Result<Vec<TransferRecord>, SourceError> {
        let mut batch = Vec::with_capacity(max.min(1024));

        while batch.len() < max {
            let Some(line) = self
                .lines
                .next_line()
                .await
                .map_err(|e| SourceError::Io(e.to_string()))?
            else {
                break;
            };
            self.line_no += 1;

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<TransferRecord>(line) {
                Ok(record) => batch.push(record),
                Err(e) => {
                    self.skipped += 1;
                    warn!(line = self.line_no, error = %e, "Skipping malformed transfer record");
                }
            }
        }

        Ok(batch)
    }
}
