use time::macros::format_description;
use time::OffsetDateTime;

use super::{column, to_utc, ParseError, RecordParser, SideTokens};
use crate::{OrderBook, Record, UtcDateTime};

const COL_TIMESTAMP: usize = 0;
const COL_TRANSACTION_TYPE: usize = 1;
const COL_QUANTITY: usize = 3;
const COL_SPOT_PRICE: usize = 5;
const COL_FEES: usize = 8;

const SIDES: SideTokens = SideTokens {
    buy: "Buy",
    sell: "Sell",
};

/// Coinbase transaction report:
/// `timestamp,transaction type,asset,quantity,spot price currency,spot price,subtotal,total,fees,notes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinbaseParser;

impl CoinbaseParser {
    pub const EXCHANGE: &'static str = "coinbase";
}

impl RecordParser for CoinbaseParser {
    fn exchange(&self) -> &'static str {
        Self::EXCHANGE
    }

    fn parse(&self, book: &OrderBook, values: &[&[u8]]) -> Result<Record, ParseError> {
        let transaction_type =
            SIDES.resolve(Self::EXCHANGE, column(values, COL_TRANSACTION_TYPE)?);
        let timestamp = parse_local_time(column(values, COL_TIMESTAMP)?)?;

        Ok(Record {
            exchange: Self::EXCHANGE,
            base_currency: book.base_currency.clone(),
            quote_currency: book.quote_currency.clone(),
            transaction_type,
            timestamp,
            amount: column(values, COL_QUANTITY)?.to_owned(),
            price: column(values, COL_SPOT_PRICE)?.to_owned(),
            fee: column(values, COL_FEES)?.to_owned(),
        })
    }
}

/// Local wall-clock time followed by its UTC offset, e.g. `2017-12-11 10:15:13 -0800`.
fn parse_local_time(value: &str) -> Result<UtcDateTime, ParseError> {
    let format = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
    );
    let parsed = OffsetDateTime::parse(value, format).map_err(|source| {
        ParseError::Timestamp {
            value: value.to_owned(),
            source,
        }
    })?;

    to_utc(value, parsed)
}
