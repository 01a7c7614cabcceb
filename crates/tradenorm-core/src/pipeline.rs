use std::fmt::{Display, Formatter};
use std::io::Read;

use csv::ByteRecord;
use thiserror::Error;

use crate::exchanges::{ParseError, RecordParser};
use crate::registry::{ExchangeRegistry, UnknownExchange};
use crate::{csv_io, OrderBook, Record};

/// Failures that abort a whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    UnknownExchange(#[from] UnknownExchange),

    #[error("failed to read full input: {0}")]
    Read(#[source] csv::Error),

    #[error("failed to write transactions: {0}")]
    Write(#[source] csv::Error),
}

/// A row that could not be parsed and was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    pub exchange: &'static str,
    /// Zero-based input row; the header is row 0.
    pub row: usize,
    pub error: ParseError,
}

impl Display for RowDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} row {}: {}", self.exchange, self.row, self.error)
    }
}

/// Outcome of normalizing one export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Parsed records in input order.
    pub records: Vec<Record>,
    pub diagnostics: Vec<RowDiagnostic>,
    /// Data rows seen, header rows excluded.
    pub rows_read: usize,
}

impl NormalizeReport {
    pub fn skipped(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Batch driver: buffers the export, skips the header, parses row by row.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    registry: ExchangeRegistry,
}

impl Pipeline {
    pub fn new(registry: ExchangeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ExchangeRegistry {
        &self.registry
    }

    pub fn run<R: Read>(
        &self,
        exchange: &str,
        book: &OrderBook,
        input: R,
    ) -> Result<NormalizeReport, PipelineError> {
        let parser = self.registry.resolve(exchange)?;
        let rows = csv_io::read_rows(input).map_err(PipelineError::Read)?;
        tracing::debug!(exchange, rows = rows.len(), "buffered input");

        Ok(normalize_rows(parser, book, &rows))
    }
}

/// Parses every row after the parser's header rows.
///
/// A failing row is recorded as a [`RowDiagnostic`] and never stops the batch.
pub fn normalize_rows(
    parser: &dyn RecordParser,
    book: &OrderBook,
    rows: &[ByteRecord],
) -> NormalizeReport {
    let exchange = parser.exchange();
    let mut report = NormalizeReport::default();

    for (row, raw) in rows.iter().enumerate().skip(parser.header_rows()) {
        report.rows_read += 1;
        let values = raw.iter().collect::<Vec<&[u8]>>();

        match parser.parse(book, &values) {
            Ok(record) => report.records.push(record),
            Err(error) => {
                tracing::warn!(exchange, row, %error, "error parsing record");
                report.diagnostics.push(RowDiagnostic {
                    exchange,
                    row,
                    error,
                });
            }
        }
    }

    report
}
