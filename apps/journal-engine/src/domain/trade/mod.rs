//! Trade Bounded Context
//!
//! A journal entry for one trade: direction, price levels, the
//! reward-to-risk ratio derived from them and the recorded outcome.
//!
//! Trades are validated when recorded and re-validated whenever their
//! prices or direction change.

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use aggregate::{NewTrade, Trade, TradeChanges};
pub use errors::TradeError;
pub use repository::TradeRepository;
pub use value_objects::{Market, TradeDateError, TradeOutcome, TradeType, parse_trade_date};
