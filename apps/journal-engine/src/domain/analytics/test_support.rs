//! Trade fixtures for analytics unit tests.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::shared::{Symbol, TradeId, UserId};
use crate::domain::trade::{Market, Trade, TradeOutcome, TradeType, parse_trade_date};

/// A buy trade with the given date, symbol, outcome and stored ratio.
pub fn trade(date: &str, symbol: &str, outcome: TradeOutcome, risk_reward: Decimal) -> Trade {
    Trade {
        id: TradeId::generate(),
        user_id: UserId::new("u1"),
        trade_date: parse_trade_date(date).unwrap(),
        market: Market::Crypto,
        symbol: Symbol::new(symbol),
        trade_type: TradeType::Buy,
        entry_price: dec!(100),
        stop_loss: dec!(90),
        take_profit: dec!(120),
        risk_reward,
        outcome,
        notes: String::new(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        version: 0,
    }
}
