//! Trade aggregate.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::TradeError;
use super::value_objects::{Market, TradeOutcome, TradeType, serde_trade_date};
use crate::domain::risk_reward::{
    PriceLevels, RiskRewardCalculator, RiskRewardError, StoredRatioCheck,
};
use crate::domain::shared::{Symbol, TradeId, UserId};

/// Maximum length of free-form notes, in characters.
pub const MAX_NOTES_LEN: usize = 2000;

/// Largest accepted price level.
pub const MAX_PRICE: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0); // 1e12

/// Largest accepted reward-to-risk ratio.
pub const MAX_RISK_REWARD: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// A journal entry for one trade.
///
/// Analytics only read trades; nothing in the engine mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Trade ID.
    pub id: TradeId,
    /// Owner.
    pub user_id: UserId,
    /// Calendar date the trade was taken.
    #[serde(with = "serde_trade_date")]
    pub trade_date: NaiveDate,
    /// Market segment.
    pub market: Market,
    /// Instrument, exactly as entered.
    pub symbol: Symbol,
    /// Direction.
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    /// Entry price.
    pub entry_price: Decimal,
    /// Stop loss price.
    pub stop_loss: Decimal,
    /// Take profit price.
    pub take_profit: Decimal,
    /// Reward-to-risk ratio derived from the prices.
    pub risk_reward: Decimal,
    /// Recorded outcome.
    #[serde(default)]
    pub outcome: TradeOutcome,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
    /// Edit counter, bumped by every applied change.
    #[serde(default)]
    pub version: u64,
}

/// Fields supplied when recording a trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrade {
    /// Calendar date of the trade.
    pub trade_date: NaiveDate,
    /// Market segment.
    pub market: Market,
    /// Instrument.
    pub symbol: Symbol,
    /// Direction.
    pub trade_type: TradeType,
    /// Entry price.
    pub entry_price: Decimal,
    /// Stop loss price.
    pub stop_loss: Decimal,
    /// Take profit price.
    pub take_profit: Decimal,
    /// Outcome, usually pending at entry time.
    pub outcome: TradeOutcome,
    /// Notes.
    pub notes: String,
}

/// Partial edit of an existing trade. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeChanges {
    /// New trade date.
    pub trade_date: Option<NaiveDate>,
    /// New market.
    pub market: Option<Market>,
    /// New symbol.
    pub symbol: Option<Symbol>,
    /// New direction.
    pub trade_type: Option<TradeType>,
    /// New entry price.
    pub entry_price: Option<Decimal>,
    /// New stop loss.
    pub stop_loss: Option<Decimal>,
    /// New take profit.
    pub take_profit: Option<Decimal>,
    /// New outcome.
    pub outcome: Option<TradeOutcome>,
    /// New notes.
    pub notes: Option<String>,
}

impl TradeChanges {
    /// Whether the edit touches the direction or any price level.
    #[must_use]
    pub const fn touches_levels(&self) -> bool {
        self.trade_type.is_some()
            || self.entry_price.is_some()
            || self.stop_loss.is_some()
            || self.take_profit.is_some()
    }
}

impl Trade {
    /// Record a new trade for `owner`, deriving its ratio from the prices.
    ///
    /// # Errors
    ///
    /// Returns `TradeError` if a field is invalid, the prices are not
    /// ordered for the direction, or the ratio rounds to zero.
    pub fn record(new: NewTrade, owner: UserId) -> Result<Self, TradeError> {
        let mut trade = Self {
            id: TradeId::generate(),
            user_id: owner,
            trade_date: new.trade_date,
            market: new.market,
            symbol: new.symbol,
            trade_type: new.trade_type,
            entry_price: new.entry_price,
            stop_loss: new.stop_loss,
            take_profit: new.take_profit,
            risk_reward: Decimal::ZERO,
            outcome: new.outcome,
            notes: new.notes,
            created_at: Utc::now(),
            version: 0,
        };
        trade.risk_reward = trade.validated_ratio()?;
        Ok(trade)
    }

    /// Apply an edit. The ratio is recomputed from the resulting prices and
    /// the version bumped; on error the trade is left unchanged.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Trade::record`].
    pub fn apply(&mut self, changes: TradeChanges) -> Result<(), TradeError> {
        let mut next = self.clone();
        if let Some(trade_date) = changes.trade_date {
            next.trade_date = trade_date;
        }
        if let Some(market) = changes.market {
            next.market = market;
        }
        if let Some(symbol) = changes.symbol {
            next.symbol = symbol;
        }
        if let Some(trade_type) = changes.trade_type {
            next.trade_type = trade_type;
        }
        if let Some(entry_price) = changes.entry_price {
            next.entry_price = entry_price;
        }
        if let Some(stop_loss) = changes.stop_loss {
            next.stop_loss = stop_loss;
        }
        if let Some(take_profit) = changes.take_profit {
            next.take_profit = take_profit;
        }
        if let Some(outcome) = changes.outcome {
            next.outcome = outcome;
        }
        if let Some(notes) = changes.notes {
            next.notes = notes;
        }

        next.risk_reward = next.validated_ratio()?;
        next.version += 1;
        *self = next;
        Ok(())
    }

    /// Price levels as a calculator input.
    #[must_use]
    pub const fn price_levels(&self) -> PriceLevels {
        PriceLevels::new(self.entry_price, self.stop_loss, self.take_profit)
    }

    /// Whether `user_id` owns this trade.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Re-validate a stored trade and recompute its ratio from the prices.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Trade::record`].
    pub fn audit(&self) -> Result<StoredRatioCheck, TradeError> {
        self.symbol.validate()?;

        for (field, price) in [
            ("entry_price", self.entry_price),
            ("stop_loss", self.stop_loss),
            ("take_profit", self.take_profit),
        ] {
            if price <= Decimal::ZERO {
                return Err(TradeError::invalid(field, "Price must be positive"));
            }
            if price > MAX_PRICE {
                return Err(TradeError::invalid(field, "Price exceeds maximum"));
            }
        }

        if self.notes.chars().count() > MAX_NOTES_LEN {
            return Err(TradeError::invalid("notes", "Notes exceed maximum length"));
        }

        let check = RiskRewardCalculator::verify_stored(self)?;
        if check.computed <= Decimal::ZERO {
            return Err(TradeError::NonPositiveRatio);
        }
        if check.computed > MAX_RISK_REWARD {
            return Err(RiskRewardError::OutOfRange.into());
        }
        Ok(check)
    }

    fn validated_ratio(&self) -> Result<Decimal, TradeError> {
        self.audit().map(|check| check.computed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk_reward::RiskRewardError;
    use rust_decimal_macros::dec;

    fn new_buy() -> NewTrade {
        NewTrade {
            trade_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            market: Market::Futures,
            symbol: Symbol::new("NQ"),
            trade_type: TradeType::Buy,
            entry_price: dec!(100),
            stop_loss: dec!(95),
            take_profit: dec!(110),
            outcome: TradeOutcome::Pending,
            notes: String::new(),
        }
    }

    #[test]
    fn record_derives_ratio() {
        let trade = Trade::record(new_buy(), UserId::new("u1")).unwrap();
        assert_eq!(trade.risk_reward, dec!(2));
        assert_eq!(trade.user_id.as_str(), "u1");
        assert!(trade.is_owned_by(&UserId::new("u1")));
    }

    #[test]
    fn record_rejects_misordered_prices() {
        let mut new = new_buy();
        new.stop_loss = dec!(105);
        let err = Trade::record(new, UserId::new("u1")).unwrap_err();
        assert_eq!(
            err,
            TradeError::InvalidRiskReward(RiskRewardError::InvalidStopLoss {
                trade_type: TradeType::Buy
            })
        );
    }

    #[test]
    fn record_rejects_ratio_rounding_to_zero() {
        let mut new = new_buy();
        new.take_profit = dec!(100.01);
        new.stop_loss = dec!(50);
        let err = Trade::record(new, UserId::new("u1")).unwrap_err();
        assert_eq!(err, TradeError::NonPositiveRatio);
    }

    #[test]
    fn record_rejects_non_positive_price() {
        let mut new = new_buy();
        new.stop_loss = dec!(-1);
        let err = Trade::record(new, UserId::new("u1")).unwrap_err();
        assert!(matches!(err, TradeError::InvalidField { ref field, .. } if field == "stop_loss"));
    }

    #[test]
    fn record_rejects_extreme_prices() {
        let mut new = new_buy();
        new.take_profit = dec!(79228162514264337593543950335);
        let err = Trade::record(new, UserId::new("u1")).unwrap_err();
        assert!(matches!(err, TradeError::InvalidField { ref field, .. } if field == "take_profit"));

        let mut new = new_buy();
        new.entry_price = dec!(0.0000000000000000000000000002);
        new.stop_loss = dec!(0.0000000000000000000000000001);
        new.take_profit = dec!(1000);
        let err = Trade::record(new, UserId::new("u1")).unwrap_err();
        assert_eq!(err, TradeError::InvalidRiskReward(RiskRewardError::OutOfRange));
    }

    #[test]
    fn audit_reports_drifted_ratio() {
        let mut trade = Trade::record(new_buy(), UserId::new("u1")).unwrap();
        trade.risk_reward = dec!(-4);
        let check = trade.audit().unwrap();
        assert_eq!(check.computed, dec!(2));
        assert!(!check.is_consistent());

        trade.stop_loss = dec!(120);
        assert!(matches!(trade.audit(), Err(TradeError::InvalidRiskReward(_))));
    }

    #[test]
    fn record_rejects_blank_symbol() {
        let mut new = new_buy();
        new.symbol = Symbol::new(" ");
        assert!(matches!(
            Trade::record(new, UserId::new("u1")),
            Err(TradeError::InvalidField { .. })
        ));
    }

    #[test]
    fn apply_recomputes_ratio() {
        let mut trade = Trade::record(new_buy(), UserId::new("u1")).unwrap();
        trade
            .apply(TradeChanges {
                take_profit: Some(dec!(115)),
                outcome: Some(TradeOutcome::Win),
                ..TradeChanges::default()
            })
            .unwrap();
        assert_eq!(trade.risk_reward, dec!(3));
        assert_eq!(trade.outcome, TradeOutcome::Win);
        assert_eq!(trade.version, 1);
    }

    #[test]
    fn apply_is_atomic_on_error() {
        let mut trade = Trade::record(new_buy(), UserId::new("u1")).unwrap();
        let before = trade.clone();
        let err = trade
            .apply(TradeChanges {
                trade_type: Some(TradeType::Sell),
                notes: Some("flipped".to_string()),
                ..TradeChanges::default()
            })
            .unwrap_err();
        assert!(matches!(err, TradeError::InvalidRiskReward(_)));
        assert_eq!(trade, before);
    }

    #[test]
    fn serde_uses_type_and_date_only() {
        let trade = Trade::record(new_buy(), UserId::new("u1")).unwrap();
        let json = serde_json::to_value(&trade).unwrap();
        assert_eq!(json["type"], "buy");
        assert_eq!(json["trade_date"], "2024-03-01");

        let parsed: Trade = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, trade);
    }

    #[test]
    fn changes_touch_levels() {
        assert!(!TradeChanges::default().touches_levels());
        let changes = TradeChanges {
            stop_loss: Some(dec!(90)),
            ..TradeChanges::default()
        };
        assert!(changes.touches_levels());
    }
}
