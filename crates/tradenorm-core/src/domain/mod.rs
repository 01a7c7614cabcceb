//! # Domain Models
//!
//! Canonical types shared by every exchange parser.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Record`] | Normalized trade row produced by a parser |
//! | [`OrderBook`] | Base/quote pair applied to every record of a run |
//! | [`Currency`] | Opaque currency code |
//! | [`TransactionType`] | Buy, sell, withdrawal or deposit |
//! | [`UtcDateTime`] | UTC instant rendered as RFC3339 |

mod currency;
mod order_book;
mod record;
mod timestamp;
mod transaction;

pub use currency::Currency;
pub use order_book::OrderBook;
pub use record::{Record, CSV_HEADERS};
pub use timestamp::UtcDateTime;
pub use transaction::TransactionType;
