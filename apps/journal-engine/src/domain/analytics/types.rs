//! Analytics result types.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::shared::Symbol;
use crate::domain::trade::TradeOutcome;

/// Wire form of [`ProfitFactor::Infinite`].
const INFINITY_TEXT: &str = "Infinity";

/// Gross win expectation over loss expectation.
///
/// Infinite when there are wins but no losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitFactor {
    /// Finite value, rounded to 2 dp.
    Finite(Decimal),
    /// Wins without any losses.
    Infinite,
}

impl ProfitFactor {
    /// Finite value, if any.
    #[must_use]
    pub const fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Finite(value) => Some(*value),
            Self::Infinite => None,
        }
    }

    /// Returns true when there were no losses.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }
}

impl Default for ProfitFactor {
    fn default() -> Self {
        Self::Finite(Decimal::ZERO)
    }
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Infinite => f.write_str(INFINITY_TEXT),
        }
    }
}

impl Serialize for ProfitFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(value) => Serialize::serialize(value, serializer),
            Self::Infinite => serializer.serialize_str(INFINITY_TEXT),
        }
    }
}

impl<'de> Deserialize<'de> for ProfitFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(Decimal),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(text) if text == INFINITY_TEXT => Ok(Self::Infinite),
            Repr::Text(text) => text
                .parse::<Decimal>()
                .map(Self::Finite)
                .map_err(serde::de::Error::custom),
            Repr::Number(value) => Ok(Self::Finite(value)),
        }
    }
}

/// Aggregate statistics for a set of trades.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStats {
    /// All trades, pending included.
    pub total_trades: u64,
    /// Trades marked win.
    pub wins: u64,
    /// Trades marked loss.
    pub losses: u64,
    /// Wins over completed trades, in percent.
    pub win_rate: Decimal,
    /// Mean R:R over completed trades.
    pub avg_risk_reward: Decimal,
    /// Expected R per trade.
    pub expected_value: Decimal,
    /// Profit factor.
    pub profit_factor: ProfitFactor,
    /// Expected value strictly above zero.
    pub is_profitable: bool,
}

impl TradeStats {
    /// Completed (win or loss) trades.
    #[must_use]
    pub const fn completed(&self) -> u64 {
        self.wins + self.losses
    }
}

/// Performance of one symbol.
///
/// Win rate here counts pending trades in the denominator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPerformance {
    /// Symbol as entered.
    pub symbol: Symbol,
    /// Trades on this symbol.
    pub trades: u64,
    /// Wins over all trades on this symbol, in percent.
    pub win_rate: Decimal,
    /// Mean R:R over all trades on this symbol.
    pub avg_risk_reward: Decimal,
}

/// Trading activity on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// Calendar date.
    pub date: NaiveDate,
    /// Trades taken that day.
    pub trade_count: u64,
    /// Wins over completed trades that day, in percent, 2 dp.
    pub win_rate: Decimal,
}

/// One completed trade in the cumulative streak series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakPoint {
    /// 1-based position in date order.
    pub sequence_index: u64,
    /// Trade date.
    pub date: NaiveDate,
    /// Win or loss.
    pub outcome: TradeOutcome,
    /// Running wins minus losses.
    pub cumulative: i64,
}

/// Count of trades in one R:R range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRewardBucket {
    /// Range label, e.g. `1.5-2`.
    pub label: String,
    /// Trades in range.
    pub count: u64,
}
