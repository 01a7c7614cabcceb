//! Core contracts for tradenorm.
//!
//! This crate contains:
//! - The canonical trade record and its flat CSV row form
//! - One parser per supported exchange export format
//! - The exchange registry used to validate and dispatch exchange identifiers
//! - The batch pipeline that turns raw CSV rows into records plus diagnostics

pub mod csv_io;
pub mod domain;
pub mod error;
pub mod exchanges;
pub mod pipeline;
pub mod registry;

pub use csv_io::{read_rows, write_records};
pub use domain::{Currency, OrderBook, Record, TransactionType, UtcDateTime, CSV_HEADERS};
pub use error::ValidationError;
pub use exchanges::{column, CoinbaseParser, GdaxParser, ParseError, QuadrigaParser, RecordParser};
pub use pipeline::{normalize_rows, NormalizeReport, Pipeline, PipelineError, RowDiagnostic};
pub use registry::{ExchangeRegistry, UnknownExchange};
