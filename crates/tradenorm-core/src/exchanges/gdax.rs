use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use super::{column, to_utc, ParseError, RecordParser, SideTokens};
use crate::{OrderBook, Record, UtcDateTime};

const COL_SIDE: usize = 2;
const COL_CREATED_AT: usize = 3;
const COL_SIZE: usize = 4;
const COL_PRICE: usize = 6;
const COL_FEE: usize = 7;

const SIDES: SideTokens = SideTokens {
    buy: "BUY",
    sell: "SELL",
};

/// GDAX fills export:
/// `trade id,product,side,created at,size,size unit,price,fee,total,price/fee/total unit`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GdaxParser;

impl GdaxParser {
    pub const EXCHANGE: &'static str = "gdax";
}

impl RecordParser for GdaxParser {
    fn exchange(&self) -> &'static str {
        Self::EXCHANGE
    }

    fn parse(&self, book: &OrderBook, values: &[&[u8]]) -> Result<Record, ParseError> {
        let transaction_type = SIDES.resolve(Self::EXCHANGE, column(values, COL_SIDE)?);
        let timestamp = parse_created_at(column(values, COL_CREATED_AT)?)?;

        Ok(Record {
            exchange: Self::EXCHANGE,
            base_currency: book.base_currency.clone(),
            quote_currency: book.quote_currency.clone(),
            transaction_type,
            timestamp,
            amount: column(values, COL_SIZE)?.to_owned(),
            price: column(values, COL_PRICE)?.to_owned(),
            fee: column(values, COL_FEE)?.to_owned(),
        })
    }
}

/// `YYYY-MM-DDThh:mm:ss[.fraction]` followed by `Z` or `±hh:mm`.
///
/// Separators are case-sensitive and seconds stop at 59.
fn parse_created_at(value: &str) -> Result<UtcDateTime, ParseError> {
    let wall_clock =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    let with_offset = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]][offset_hour sign:mandatory]:[offset_minute]"
    );

    let parsed = match value.strip_suffix('Z') {
        Some(utc) => PrimitiveDateTime::parse(utc, wall_clock).map(PrimitiveDateTime::assume_utc),
        None => OffsetDateTime::parse(value, with_offset),
    }
    .map_err(|source| ParseError::Timestamp {
        value: value.to_owned(),
        source,
    })?;

    to_utc(value, parsed)
}
