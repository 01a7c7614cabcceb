use crate::{Currency, TransactionType, UtcDateTime};

/// Column names of the normalized output, in [`Record::to_row`] order.
pub const CSV_HEADERS: [&str; 8] = [
    "exchange",
    "base_currency",
    "quote_currency",
    "transaction_type",
    "timestamp",
    "amount",
    "price",
    "fee",
];

/// Exchange-agnostic trade record.
///
/// `amount`, `price` and `fee` hold the exact decimal text of the export and are
/// never converted to a numeric type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub exchange: &'static str,
    pub base_currency: Currency,
    pub quote_currency: Currency,
    /// `None` when the export's side token was not recognized.
    pub transaction_type: Option<TransactionType>,
    pub timestamp: UtcDateTime,
    pub amount: String,
    pub price: String,
    pub fee: String,
}

impl Record {
    pub fn to_row(&self) -> [String; 8] {
        [
            self.exchange.to_owned(),
            self.base_currency.as_str().to_owned(),
            self.quote_currency.as_str().to_owned(),
            self.transaction_type
                .map(TransactionType::as_str)
                .unwrap_or_default()
                .to_owned(),
            self.timestamp.format_rfc3339(),
            self.amount.clone(),
            self.price.clone(),
            self.fee.clone(),
        ]
    }
}
