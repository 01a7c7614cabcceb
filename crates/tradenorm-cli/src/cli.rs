//! CLI argument definitions for tradenorm.
//!
//! ```bash
//! tradenorm gdax ETH BTC < fills.csv > normalized.csv
//! tradenorm --log-level warn quadriga BTC CAD < trades.csv
//! ```

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

/// Normalize an exchange transaction export read from stdin into canonical CSV on stdout.
#[derive(Debug, Parser)]
#[command(name = "tradenorm", version)]
pub struct Cli {
    /// Minimum level of diagnostics written to stderr.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Exchange the export comes from.
    #[arg(value_name = "EXCHANGE")]
    pub exchange: String,

    /// Currency acquired by a buy.
    #[arg(value_name = "BASECURRENCY")]
    pub base_currency: String,

    /// Currency paid by a buy.
    #[arg(value_name = "QUOTECURRENCY")]
    pub quote_currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// `usage: <program> <format: a|b> <basecurrency> <quotecurrency>`
pub fn usage(program: &str, exchanges: &[&str]) -> String {
    format!(
        "usage: {program} <format: {}> <basecurrency> <quotecurrency>",
        exchanges.join("|")
    )
}
