use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::ValidationError;

/// UTC instant whose year fits in four digits, so RFC3339 rendering is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = OffsetDateTime::parse(input, &Rfc3339).map_err(|_| {
            ValidationError::InvalidTimestamp {
                value: input.to_owned(),
            }
        })?;

        Self::from_offset_datetime(parsed)
    }

    /// Converts any offset to UTC.
    pub fn from_offset_datetime(value: OffsetDateTime) -> Result<Self, ValidationError> {
        let utc = value
            .checked_to_offset(UtcOffset::UTC)
            .ok_or(ValidationError::TimestampOutOfRange)?;

        if !(0..=9999).contains(&utc.year()) {
            return Err(ValidationError::TimestampOutOfRange);
        }

        Ok(Self(utc))
    }

    pub fn from_unix_timestamp_nanos(nanos: i128) -> Result<Self, ValidationError> {
        let value = OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map_err(|_| ValidationError::TimestampOutOfRange)?;
        Self::from_offset_datetime(value)
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    pub fn unix_timestamp_nanos(self) -> i128 {
        self.0.unix_timestamp_nanos()
    }

    /// RFC3339 with second precision; sub-second digits are truncated.
    pub fn format_rfc3339(self) -> String {
        self.0
            .format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
            ))
            .expect("UtcDateTime must be RFC3339 formattable")
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_sub_second_digits() {
        let ts = UtcDateTime::from_unix_timestamp_nanos(1_491_614_523_999_999_999)
            .expect("must convert");
        assert_eq!(ts.format_rfc3339(), "2017-04-08T01:22:03Z");
    }

    #[test]
    fn pads_four_digit_year_at_both_ends() {
        let earliest = UtcDateTime::parse("0000-01-01T00:00:00Z").expect("must parse");
        assert_eq!(earliest.format_rfc3339(), "0000-01-01T00:00:00Z");

        let latest = UtcDateTime::parse("9999-12-31T23:59:59.999Z").expect("must parse");
        assert_eq!(latest.to_string(), "9999-12-31T23:59:59Z");
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let parsed = UtcDateTime::parse("2017-12-11T10:15:13-08:00").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2017-12-11T18:15:13Z");
        assert_eq!(parsed.into_inner().offset(), UtcOffset::UTC);
    }

    #[test]
    fn rejects_non_rfc3339_input() {
        let err = UtcDateTime::parse("2017-12-11 10:15:13").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimestamp { .. }));
    }

    #[test]
    fn rejects_years_beyond_four_digits() {
        let err = UtcDateTime::from_unix_timestamp_nanos(253_402_300_800 * 1_000_000_000)
            .expect_err("year 10000 must fail");
        assert_eq!(err, ValidationError::TimestampOutOfRange);
    }
}
