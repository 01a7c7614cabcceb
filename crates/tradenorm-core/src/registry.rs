use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use crate::exchanges::{CoinbaseParser, GdaxParser, QuadrigaParser, RecordParser};

/// Requested exchange has no registered parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid exchange '{value}', expected one of {}", .valid.join(", "))]
pub struct UnknownExchange {
    pub value: String,
    pub valid: Vec<&'static str>,
}

/// Immutable mapping from exchange identifier to parser.
///
/// The set of valid identifiers is exactly the set of registered parsers.
#[derive(Debug, Clone)]
pub struct ExchangeRegistry {
    parsers: BTreeMap<&'static str, Arc<dyn RecordParser>>,
}

impl Default for ExchangeRegistry {
    fn default() -> Self {
        Self::new(vec![
            Arc::new(CoinbaseParser),
            Arc::new(GdaxParser),
            Arc::new(QuadrigaParser),
        ])
    }
}

impl ExchangeRegistry {
    /// Later parsers replace earlier ones with the same identifier.
    pub fn new(parsers: Vec<Arc<dyn RecordParser>>) -> Self {
        let parsers = parsers
            .into_iter()
            .map(|parser| (parser.exchange(), parser))
            .collect();
        Self { parsers }
    }

    pub fn get(&self, exchange: &str) -> Option<&dyn RecordParser> {
        self.parsers.get(exchange).map(Arc::as_ref)
    }

    pub fn resolve(&self, exchange: &str) -> Result<&dyn RecordParser, UnknownExchange> {
        self.get(exchange).ok_or_else(|| UnknownExchange {
            value: exchange.to_owned(),
            valid: self.names(),
        })
    }

    pub fn contains(&self, exchange: &str) -> bool {
        self.parsers.contains_key(exchange)
    }

    /// Registered identifiers in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.parsers.keys().copied().collect()
    }
}
