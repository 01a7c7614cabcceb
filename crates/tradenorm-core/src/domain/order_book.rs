use crate::Currency;

/// Base/quote pair supplied once per run and stamped onto every record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderBook {
    pub base_currency: Currency,
    pub quote_currency: Currency,
}

impl OrderBook {
    pub fn new(base_currency: Currency, quote_currency: Currency) -> Self {
        Self {
            base_currency,
            quote_currency,
        }
    }
}
