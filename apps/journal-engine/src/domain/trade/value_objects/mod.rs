//! Trade Value Objects

mod market;
mod outcome;
mod trade_date;
mod trade_type;

pub use market::Market;
pub use outcome::TradeOutcome;
pub use trade_date::{TradeDateError, parse_trade_date};
pub use trade_type::TradeType;

pub(crate) use trade_date::serde_trade_date;
