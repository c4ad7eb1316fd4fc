//! Trade DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::risk_reward::RiskRewardRating;
use crate::domain::shared::Symbol;
use crate::domain::trade::{
    Market, NewTrade, Trade, TradeChanges, TradeError, TradeOutcome, TradeType, parse_trade_date,
};

/// DTO for recording a trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordTradeDto {
    /// Trade date, `YYYY-MM-DD` or a full timestamp.
    pub trade_date: String,
    /// Market.
    pub market: Market,
    /// Symbol.
    pub symbol: String,
    /// Direction.
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    /// Entry price.
    pub entry_price: Decimal,
    /// Stop loss.
    pub stop_loss: Decimal,
    /// Take profit.
    pub take_profit: Decimal,
    /// Outcome.
    #[serde(default)]
    pub outcome: TradeOutcome,
    /// Notes.
    #[serde(default)]
    pub notes: String,
}

impl RecordTradeDto {
    /// Convert to domain input.
    ///
    /// # Errors
    ///
    /// Returns `TradeError::InvalidField` if the trade date does not parse.
    pub fn to_new_trade(&self) -> Result<NewTrade, TradeError> {
        Ok(NewTrade {
            trade_date: parse_date(&self.trade_date)?,
            market: self.market,
            symbol: Symbol::new(&self.symbol),
            trade_type: self.trade_type,
            entry_price: self.entry_price,
            stop_loss: self.stop_loss,
            take_profit: self.take_profit,
            outcome: self.outcome,
            notes: self.notes.clone(),
        })
    }
}

/// DTO for editing a trade. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTradeDto {
    /// Trade date.
    #[serde(default)]
    pub trade_date: Option<String>,
    /// Market.
    #[serde(default)]
    pub market: Option<Market>,
    /// Symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Direction.
    #[serde(default, rename = "type")]
    pub trade_type: Option<TradeType>,
    /// Entry price.
    #[serde(default)]
    pub entry_price: Option<Decimal>,
    /// Stop loss.
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    /// Take profit.
    #[serde(default)]
    pub take_profit: Option<Decimal>,
    /// Outcome.
    #[serde(default)]
    pub outcome: Option<TradeOutcome>,
    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateTradeDto {
    /// Convert to a domain edit.
    ///
    /// # Errors
    ///
    /// Returns `TradeError::InvalidField` if the trade date does not parse.
    pub fn to_changes(&self) -> Result<TradeChanges, TradeError> {
        Ok(TradeChanges {
            trade_date: self.trade_date.as_deref().map(parse_date).transpose()?,
            market: self.market,
            symbol: self.symbol.as_deref().map(Symbol::new),
            trade_type: self.trade_type,
            entry_price: self.entry_price,
            stop_loss: self.stop_loss,
            take_profit: self.take_profit,
            outcome: self.outcome,
            notes: self.notes.clone(),
        })
    }
}

fn parse_date(raw: &str) -> Result<chrono::NaiveDate, TradeError> {
    parse_trade_date(raw).map_err(|e| TradeError::invalid("trade_date", e.to_string()))
}

/// DTO representing a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeDto {
    /// Trade ID.
    pub id: String,
    /// Owner.
    pub user_id: String,
    /// Trade date (`YYYY-MM-DD`).
    pub trade_date: String,
    /// Market.
    pub market: Market,
    /// Symbol.
    pub symbol: String,
    /// Direction.
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    /// Entry price.
    pub entry_price: Decimal,
    /// Stop loss.
    pub stop_loss: Decimal,
    /// Take profit.
    pub take_profit: Decimal,
    /// Reward-to-risk ratio.
    pub risk_reward: Decimal,
    /// Ratio rating.
    pub rating: RiskRewardRating,
    /// Outcome.
    pub outcome: TradeOutcome,
    /// Notes.
    pub notes: String,
    /// When recorded.
    pub created_at: DateTime<Utc>,
    /// Edit counter.
    pub version: u64,
}

impl From<&Trade> for TradeDto {
    fn from(trade: &Trade) -> Self {
        Self {
            id: trade.id.to_string(),
            user_id: trade.user_id.to_string(),
            trade_date: trade.trade_date.format("%Y-%m-%d").to_string(),
            market: trade.market,
            symbol: trade.symbol.to_string(),
            trade_type: trade.trade_type,
            entry_price: trade.entry_price,
            stop_loss: trade.stop_loss,
            take_profit: trade.take_profit,
            risk_reward: trade.risk_reward,
            rating: RiskRewardRating::from_ratio(trade.risk_reward),
            outcome: trade.outcome,
            notes: trade.notes.clone(),
            created_at: trade.created_at,
            version: trade.version,
        }
    }
}
