//! Exchange export parsers.
//!
//! Each parser maps one raw CSV row of a specific exchange export onto a
//! [`Record`]. Column positions, side tokens and timestamp encodings are fixed
//! per exchange.

mod coinbase;
mod gdax;
mod quadriga;

use std::fmt::Debug;

use thiserror::Error;

use crate::{OrderBook, Record, TransactionType, UtcDateTime};

pub use coinbase::CoinbaseParser;
pub use gdax::GdaxParser;
pub use quadriga::QuadrigaParser;

/// Row-level failure. The offending row is dropped; the batch continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("row has {len} columns, column {index} is required")]
    MissingColumn { index: usize, len: usize },

    #[error("column {index} is not valid UTF-8")]
    InvalidUtf8 { index: usize },

    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        source: time::error::Parse,
    },

    #[error("invalid epoch timestamp '{value}', expected seconds[.fraction]")]
    EpochTimestamp { value: String },

    #[error("timestamp '{value}' is out of range")]
    TimestampOutOfRange { value: String },
}

/// Parser for one exchange export format.
pub trait RecordParser: Debug + Send + Sync {
    /// Identifier used on the command line and in the `exchange` output column.
    fn exchange(&self) -> &'static str;

    /// Leading rows discarded before parsing.
    fn header_rows(&self) -> usize {
        1
    }

    /// `values` are the raw fields of one row; decode the ones read with [`column`].
    fn parse(&self, book: &OrderBook, values: &[&[u8]]) -> Result<Record, ParseError>;
}

/// Exact-match side tokens of an export.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SideTokens {
    pub buy: &'static str,
    pub sell: &'static str,
}

impl SideTokens {
    /// Unrecognized tokens leave the type unset instead of failing the row.
    pub fn resolve(self, exchange: &'static str, token: &str) -> Option<TransactionType> {
        if token == self.buy {
            Some(TransactionType::Buy)
        } else if token == self.sell {
            Some(TransactionType::Sell)
        } else {
            tracing::warn!(exchange, token, "unrecognized side token, transaction type left unset");
            None
        }
    }
}

/// Field `index` decoded as UTF-8. Fields a parser never reads are never decoded.
pub fn column<'a>(values: &[&'a [u8]], index: usize) -> Result<&'a str, ParseError> {
    let raw = values.get(index).copied().ok_or(ParseError::MissingColumn {
        index,
        len: values.len(),
    })?;

    std::str::from_utf8(raw).map_err(|_| ParseError::InvalidUtf8 { index })
}

#[cfg(test)]
pub(crate) fn raw_row<'a>(values: &[&'a str]) -> Vec<&'a [u8]> {
    values.iter().map(|value| value.as_bytes()).collect()
}

pub(crate) fn out_of_range(value: &str) -> ParseError {
    ParseError::TimestampOutOfRange {
        value: value.to_owned(),
    }
}

pub(crate) fn to_utc(
    value: &str,
    parsed: time::OffsetDateTime,
) -> Result<UtcDateTime, ParseError> {
    UtcDateTime::from_offset_datetime(parsed).map_err(|_| out_of_range(value))
}
