use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Opaque currency code such as `BTC` or `USD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(Cow<'static, str>);

impl Currency {
    pub const BTC: Self = Self(Cow::Borrowed("BTC"));
    pub const ETH: Self = Self(Cow::Borrowed("ETH"));
    pub const LTC: Self = Self(Cow::Borrowed("LTC"));
    pub const CAD: Self = Self(Cow::Borrowed("CAD"));
    pub const USD: Self = Self(Cow::Borrowed("USD"));

    /// Accepts any non-empty code and keeps it byte for byte.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::EmptyCurrency);
        }

        Ok(Self(Cow::Owned(input.to_owned())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}
