//! Reward-to-risk calculation.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::errors::RiskRewardError;
use crate::domain::trade::{Trade, TradeType};

/// Decimal places of a reported ratio.
const RATIO_DP: u32 = 2;

/// Parsed price levels of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLevels {
    /// Entry price.
    pub entry: Decimal,
    /// Stop loss price.
    pub stop_loss: Decimal,
    /// Take profit price.
    pub take_profit: Decimal,
}

impl PriceLevels {
    /// Create price levels.
    #[must_use]
    pub const fn new(entry: Decimal, stop_loss: Decimal, take_profit: Decimal) -> Self {
        Self {
            entry,
            stop_loss,
            take_profit,
        }
    }
}

/// Raw price text from a partially filled form.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceInputs<'a> {
    /// Entry price as typed.
    pub entry: &'a str,
    /// Stop loss as typed.
    pub stop_loss: &'a str,
    /// Take profit as typed.
    pub take_profit: &'a str,
}

impl PriceInputs<'_> {
    /// Parse all three prices. `None` when any of them is not a finite number.
    #[must_use]
    pub fn parse(&self) -> Option<PriceLevels> {
        Some(PriceLevels {
            entry: parse_price(self.entry)?,
            stop_loss: parse_price(self.stop_loss)?,
            take_profit: parse_price(self.take_profit)?,
        })
    }
}

/// Outcome of re-checking a stored trade's ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredRatioCheck {
    /// Ratio recomputed from the stored prices.
    pub computed: Decimal,
    /// Ratio stored on the trade.
    pub stored: Decimal,
}

impl StoredRatioCheck {
    /// Whether the stored ratio equals the recomputed one.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.computed == self.stored
    }
}

/// Reward-to-risk calculator.
///
/// Stateless; every call is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskRewardCalculator;

impl RiskRewardCalculator {
    /// Compute the ratio for validated price levels.
    ///
    /// `ratio = |target - entry| / |entry - stop|`, rounded to 2 dp with
    /// midpoints away from zero.
    ///
    /// # Errors
    ///
    /// - `ZeroRisk` when entry equals stop.
    /// - `InvalidStopLoss` / `InvalidTakeProfit` when a level sits on the
    ///   wrong side of the entry for `trade_type`.
    /// - `OutOfRange` when the distances or the ratio exceed the decimal range.
    pub fn compute(
        levels: &PriceLevels,
        trade_type: TradeType,
    ) -> Result<Decimal, RiskRewardError> {
        let PriceLevels {
            entry,
            stop_loss,
            take_profit,
        } = *levels;

        let risk = entry
            .checked_sub(stop_loss)
            .ok_or(RiskRewardError::OutOfRange)?
            .abs();
        if risk.is_zero() {
            return Err(RiskRewardError::ZeroRisk);
        }

        let (stop_ok, target_ok) = match trade_type {
            TradeType::Buy => (stop_loss < entry, take_profit > entry),
            TradeType::Sell => (stop_loss > entry, take_profit < entry),
        };
        if !stop_ok {
            return Err(RiskRewardError::InvalidStopLoss { trade_type });
        }
        if !target_ok {
            return Err(RiskRewardError::InvalidTakeProfit { trade_type });
        }

        let reward = take_profit
            .checked_sub(entry)
            .ok_or(RiskRewardError::OutOfRange)?
            .abs();
        let ratio = reward
            .checked_div(risk)
            .ok_or(RiskRewardError::OutOfRange)?;
        Ok(ratio.round_dp_with_strategy(RATIO_DP, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Evaluate raw form input.
    ///
    /// Returns `Ok(None)` while any price is missing or not a number; the
    /// form shows no ratio and no message in that state.
    ///
    /// # Errors
    ///
    /// Same as [`Self::compute`] once all prices parse.
    pub fn evaluate(
        inputs: &PriceInputs<'_>,
        trade_type: TradeType,
    ) -> Result<Option<Decimal>, RiskRewardError> {
        inputs
            .parse()
            .map(|levels| Self::compute(&levels, trade_type))
            .transpose()
    }

    /// Ratio a form stores next to the record: the computed value, or zero
    /// when the evaluation was indeterminate or invalid.
    #[must_use]
    pub fn ratio_or_zero(evaluation: &Result<Option<Decimal>, RiskRewardError>) -> Decimal {
        match evaluation {
            Ok(Some(ratio)) => *ratio,
            Ok(None) | Err(_) => Decimal::ZERO,
        }
    }

    /// Recompute a stored trade's ratio from its prices.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the stored prices are no longer
    /// ordered for the trade's direction.
    pub fn verify_stored(trade: &Trade) -> Result<StoredRatioCheck, RiskRewardError> {
        let computed = Self::compute(&trade.price_levels(), trade.trade_type)?;
        Ok(StoredRatioCheck {
            computed,
            stored: trade.risk_reward,
        })
    }
}

/// Parse one price field. Blank, non-numeric, NaN and infinite values yield `None`.
fn parse_price(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed).ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .and_then(|value| Decimal::try_from(value).ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn levels(entry: Decimal, stop: Decimal, target: Decimal) -> PriceLevels {
        PriceLevels::new(entry, stop, target)
    }

    #[test]
    fn buy_ratio() {
        let ratio =
            RiskRewardCalculator::compute(&levels(dec!(100), dec!(95), dec!(110)), TradeType::Buy)
                .unwrap();
        assert_eq!(ratio, dec!(2));
    }

    #[test]
    fn sell_ratio_is_rounded() {
        let ratio = RiskRewardCalculator::compute(
            &levels(dec!(100), dec!(103), dec!(90)),
            TradeType::Sell,
        )
        .unwrap();
        assert_eq!(ratio, dec!(3.33));
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        // 1.125 / 1 -> 1.13
        let ratio = RiskRewardCalculator::compute(
            &levels(dec!(10), dec!(9), dec!(11.125)),
            TradeType::Buy,
        )
        .unwrap();
        assert_eq!(ratio, dec!(1.13));
    }

    #[test]
    fn buy_stop_above_entry_rejected() {
        let err =
            RiskRewardCalculator::compute(&levels(dec!(100), dec!(105), dec!(110)), TradeType::Buy)
                .unwrap_err();
        assert_eq!(
            err,
            RiskRewardError::InvalidStopLoss {
                trade_type: TradeType::Buy
            }
        );
    }

    #[test]
    fn buy_target_below_entry_rejected() {
        let err =
            RiskRewardCalculator::compute(&levels(dec!(100), dec!(95), dec!(100)), TradeType::Buy)
                .unwrap_err();
        assert_eq!(
            err,
            RiskRewardError::InvalidTakeProfit {
                trade_type: TradeType::Buy
            }
        );
    }

    #[test]
    fn sell_levels_rejected() {
        let err = RiskRewardCalculator::compute(
            &levels(dec!(100), dec!(95), dec!(90)),
            TradeType::Sell,
        )
        .unwrap_err();
        assert!(matches!(err, RiskRewardError::InvalidStopLoss { .. }));

        let err = RiskRewardCalculator::compute(
            &levels(dec!(100), dec!(105), dec!(101)),
            TradeType::Sell,
        )
        .unwrap_err();
        assert!(matches!(err, RiskRewardError::InvalidTakeProfit { .. }));
    }

    #[test]
    fn zero_risk_for_either_direction() {
        for trade_type in [TradeType::Buy, TradeType::Sell] {
            let err = RiskRewardCalculator::compute(
                &levels(dec!(100), dec!(100), dec!(110)),
                trade_type,
            )
            .unwrap_err();
            assert_eq!(err, RiskRewardError::ZeroRisk);
        }
    }

    #[test]
    fn evaluate_is_indeterminate_on_unparseable_input() {
        let inputs = PriceInputs {
            entry: "100",
            stop_loss: "",
            take_profit: "110",
        };
        assert_eq!(
            RiskRewardCalculator::evaluate(&inputs, TradeType::Buy),
            Ok(None)
        );

        let inputs = PriceInputs {
            entry: "abc",
            stop_loss: "95",
            take_profit: "110",
        };
        assert_eq!(
            RiskRewardCalculator::evaluate(&inputs, TradeType::Buy),
            Ok(None)
        );

        let inputs = PriceInputs {
            entry: "NaN",
            stop_loss: "95",
            take_profit: "inf",
        };
        assert_eq!(
            RiskRewardCalculator::evaluate(&inputs, TradeType::Buy),
            Ok(None)
        );
    }

    #[test]
    fn evaluate_accepts_scientific_notation() {
        let inputs = PriceInputs {
            entry: "1e2",
            stop_loss: " 95 ",
            take_profit: "110",
        };
        assert_eq!(
            RiskRewardCalculator::evaluate(&inputs, TradeType::Buy),
            Ok(Some(dec!(2)))
        );
    }

    #[test]
    fn ratio_or_zero_falls_back() {
        let invalid = PriceInputs {
            entry: "100",
            stop_loss: "105",
            take_profit: "110",
        };
        let evaluation = RiskRewardCalculator::evaluate(&invalid, TradeType::Buy);
        assert_eq!(RiskRewardCalculator::ratio_or_zero(&evaluation), Decimal::ZERO);

        let blank = PriceInputs::default();
        let evaluation = RiskRewardCalculator::evaluate(&blank, TradeType::Sell);
        assert_eq!(RiskRewardCalculator::ratio_or_zero(&evaluation), Decimal::ZERO);

        let valid = PriceInputs {
            entry: "1.1000",
            stop_loss: "1.0950",
            take_profit: "1.1100",
        };
        let evaluation = RiskRewardCalculator::evaluate(&valid, TradeType::Buy);
        assert_eq!(RiskRewardCalculator::ratio_or_zero(&evaluation), dec!(2));
    }

    #[test]
    fn extreme_prices_are_out_of_range() {
        let inputs = PriceInputs {
            entry: "0.0000000000000000000000000002",
            stop_loss: "0.0000000000000000000000000001",
            take_profit: "79228162514264337593543950335",
        };
        assert_eq!(
            RiskRewardCalculator::evaluate(&inputs, TradeType::Buy),
            Err(RiskRewardError::OutOfRange)
        );

        let inputs = PriceInputs {
            entry: "79228162514264337593543950335",
            stop_loss: "-79228162514264337593543950335",
            take_profit: "79228162514264337593543950335",
        };
        assert_eq!(
            RiskRewardCalculator::evaluate(&inputs, TradeType::Buy),
            Err(RiskRewardError::OutOfRange)
        );
    }
}
