use super::{column, out_of_range, ParseError, RecordParser, SideTokens};
use crate::{OrderBook, Record, UtcDateTime};

const COL_TYPE: usize = 0;
const COL_AMOUNT: usize = 3;
const COL_RATE: usize = 4;
const COL_FEE: usize = 6;
const COL_TIMESTAMP: usize = 8;

const SIDES: SideTokens = SideTokens {
    buy: "buy",
    sell: "sell",
};

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MILLI: i128 = 1_000_000;

/// QuadrigaCX trade history export:
/// `type,major,minor,amount,rate,value,fee,total,timestamp,datetime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadrigaParser;

impl QuadrigaParser {
    pub const EXCHANGE: &'static str = "quadriga";
}

impl RecordParser for QuadrigaParser {
    fn exchange(&self) -> &'static str {
        Self::EXCHANGE
    }

    fn parse(&self, book: &OrderBook, values: &[&[u8]]) -> Result<Record, ParseError> {
        let transaction_type = SIDES.resolve(Self::EXCHANGE, column(values, COL_TYPE)?);
        let timestamp = parse_epoch(column(values, COL_TIMESTAMP)?)?;

        Ok(Record {
            exchange: Self::EXCHANGE,
            base_currency: book.base_currency.clone(),
            quote_currency: book.quote_currency.clone(),
            transaction_type,
            timestamp,
            amount: column(values, COL_AMOUNT)?.to_owned(),
            price: column(values, COL_RATE)?.to_owned(),
            fee: column(values, COL_FEE)?.to_owned(),
        })
    }
}

/// Decimal Unix time `seconds[.fraction]` with millisecond resolution.
///
/// The fraction is read digit by digit so `.151` is exactly 151ms; digits past
/// the third are truncated.
fn parse_epoch(value: &str) -> Result<UtcDateTime, ParseError> {
    let invalid = || ParseError::EpochTimestamp {
        value: value.to_owned(),
    };

    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(invalid());
    }

    let seconds = if whole.is_empty() {
        0
    } else {
        whole.parse::<i128>().map_err(|_| out_of_range(value))?
    };
    let millis = fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0_i128, |acc, digit| acc * 10 + i128::from(digit - b'0'));

    let nanos = seconds
        .checked_mul(NANOS_PER_SECOND)
        .and_then(|nanos| nanos.checked_add(millis * NANOS_PER_MILLI))
        .ok_or_else(|| out_of_range(value))?;
    let nanos = if negative { -nanos } else { nanos };

    UtcDateTime::from_unix_timestamp_nanos(nanos).map_err(|_| out_of_range(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchanges::raw_row;
    use crate::{Currency, TransactionType};

    const TRADE: [&str; 10] = [
        "buy",
        "btc",
        "cad",
        "0.01000000",
        "22000.00",
        "220.00",
        "0.00005000",
        "0.00995000",
        "1513303913.151",
        "2017-12-15 02:11:53",
    ];

    fn btc_cad() -> OrderBook {
        OrderBook::new(Currency::BTC, Currency::CAD)
    }

    fn with_column(index: usize, value: &'static str) -> [&'static str; 10] {
        let mut row = TRADE;
        row[index] = value;
        row
    }

    fn epoch_nanos(value: &str) -> i128 {
        parse_epoch(value)
            .expect("must parse")
            .unix_timestamp_nanos()
    }

    #[test]
    fn parses_trade_row() {
        let record = QuadrigaParser.parse(&btc_cad(), &raw_row(&TRADE)).expect("must parse");

        assert_eq!(record.exchange, "quadriga");
        assert_eq!(record.base_currency, Currency::BTC);
        assert_eq!(record.quote_currency, Currency::CAD);
        assert_eq!(record.transaction_type, Some(TransactionType::Buy));
        assert_eq!(
            record.timestamp.unix_timestamp_nanos(),
            1_513_303_913_151_000_000
        );
        assert_eq!(record.amount, "0.01000000");
        assert_eq!(record.price, "22000.00");
        assert_eq!(record.fee, "0.00005000");
    }

    #[test]
    fn maps_lowercase_sides_only() {
        let sell = QuadrigaParser
            .parse(&btc_cad(), &raw_row(&with_column(COL_TYPE, "sell")))
            .expect("must parse");
        assert_eq!(sell.transaction_type, Some(TransactionType::Sell));

        let upper = QuadrigaParser
            .parse(&btc_cad(), &raw_row(&with_column(COL_TYPE, "BUY")))
            .expect("must parse");
        assert_eq!(upper.transaction_type, None);
    }

    #[test]
    fn epoch_fraction_is_exact_milliseconds() {
        assert_eq!(epoch_nanos("1513303913.151"), 1_513_303_913_151_000_000);
        assert_eq!(epoch_nanos("1513303913.1"), 1_513_303_913_100_000_000);
        assert_eq!(epoch_nanos("1513303913.15199"), 1_513_303_913_151_000_000);
        assert_eq!(epoch_nanos("1513303913"), 1_513_303_913_000_000_000);
        assert_eq!(epoch_nanos("1513303913."), 1_513_303_913_000_000_000);
    }

    #[test]
    fn negative_epoch_is_before_unix_origin() {
        assert_eq!(epoch_nanos("-1.5"), -1_500_000_000);
    }

    #[test]
    fn rejects_non_decimal_epoch() {
        for value in ["", ".", "abc", "1.5e3", "1513303913,151", " 1513303913"] {
            let err = parse_epoch(value).expect_err("must fail");
            assert!(matches!(err, ParseError::EpochTimestamp { .. }), "value {value:?}");
        }
    }

    #[test]
    fn rejects_epoch_beyond_year_9999() {
        let err = parse_epoch("99999999999999").expect_err("must fail");
        assert!(matches!(err, ParseError::TimestampOutOfRange { .. }));
    }
}
