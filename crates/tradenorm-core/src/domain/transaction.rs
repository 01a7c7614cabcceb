use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Direction of a normalized transaction relative to the base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Base currency acquired.
    Buy,
    /// Base currency disposed.
    Sell,
    Withdrawal,
    Deposit,
}

impl TransactionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Withdrawal => "withdrawal",
            Self::Deposit => "deposit",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
