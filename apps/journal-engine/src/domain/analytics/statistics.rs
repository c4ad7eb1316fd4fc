//! Trade statistics engine.

use rust_decimal::Decimal;

use super::constants::HUNDRED;
use super::errors::AggregationError;
use super::math::{mean, percentage, round_display};
use super::types::{ProfitFactor, TradeStats};
use crate::domain::trade::Trade;

/// Summarize a trade list.
///
/// Win rate and average R:R consider completed trades only. Expected value
/// and profit factor are derived from the unrounded win rate and average;
/// only the reported fields are rounded. An empty list yields all-zero
/// stats. A profit factor beyond the decimal range is reported as
/// `Decimal::MAX`.
#[must_use]
pub fn summarize(trades: &[Trade]) -> TradeStats {
    compute(trades).stats
}

/// Summarize a trade list, rejecting empty input and malformed trades.
///
/// # Errors
///
/// - `EmptyInput` for an empty list.
/// - `MalformedTrade` for the first trade with a negative `risk_reward`.
/// - `OutOfRange` when a derived figure overflows.
pub fn try_summarize(trades: &[Trade]) -> Result<TradeStats, AggregationError> {
    if trades.is_empty() {
        return Err(AggregationError::EmptyInput);
    }

    if let Some(trade) = trades.iter().find(|t| t.risk_reward < Decimal::ZERO) {
        return Err(AggregationError::MalformedTrade {
            trade_id: trade.id.to_string(),
            reason: format!("negative risk_reward {}", trade.risk_reward),
        });
    }

    let summary = compute(trades);
    if summary.saturated {
        return Err(AggregationError::OutOfRange);
    }
    Ok(summary.stats)
}

struct Summary {
    stats: TradeStats,
    saturated: bool,
}

fn compute(trades: &[Trade]) -> Summary {
    if trades.is_empty() {
        return Summary {
            stats: TradeStats::default(),
            saturated: false,
        };
    }

    let mut wins = 0_u64;
    let mut losses = 0_u64;
    let mut completed_rr = Vec::with_capacity(trades.len());
    for trade in trades {
        if trade.outcome.is_win() {
            wins += 1;
        } else if trade.outcome.is_loss() {
            losses += 1;
        } else {
            continue;
        }
        completed_rr.push(trade.risk_reward);
    }

    let win_rate = percentage(wins, wins + losses);
    let avg = mean(&completed_rr);
    let mut saturated = !completed_rr.is_empty() && avg.is_none();
    let avg_risk_reward = avg.unwrap_or(Decimal::ZERO);

    let win_fraction = win_rate / HUNDRED;
    let loss_fraction = Decimal::ONE - win_fraction;
    let win_expectation = win_fraction * avg_risk_reward;
    let expected_value = win_expectation - loss_fraction;

    let profit_factor = if wins == 0 {
        ProfitFactor::Finite(Decimal::ZERO)
    } else if losses == 0 {
        ProfitFactor::Infinite
    } else {
        let ratio = win_expectation.checked_div(loss_fraction).unwrap_or_else(|| {
            saturated = true;
            Decimal::MAX
        });
        ProfitFactor::Finite(round_display(ratio))
    };

    Summary {
        stats: TradeStats {
            total_trades: trades.len() as u64,
            wins,
            losses,
            win_rate: round_display(win_rate),
            avg_risk_reward: round_display(avg_risk_reward),
            expected_value: round_display(expected_value),
            profit_factor,
            is_profitable: expected_value > Decimal::ZERO,
        },
        saturated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::test_support::trade;
    use crate::domain::trade::TradeOutcome::{Loss, Pending, Win};
    use rust_decimal_macros::dec;

    #[test]
    fn empty_input_is_all_zero() {
        let stats = summarize(&[]);
        assert_eq!(stats, TradeStats::default());
        assert!(!stats.is_profitable);
    }

    #[test]
    fn win_rate_excludes_pending() {
        let trades = [
            trade("2024-01-01", "NQ", Win, dec!(2)),
            trade("2024-01-02", "NQ", Win, dec!(2)),
            trade("2024-01-03", "NQ", Loss, dec!(2)),
            trade("2024-01-04", "NQ", Pending, dec!(2)),
        ];
        let stats = summarize(&trades);
        assert_eq!(stats.total_trades, 4);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.completed(), 3);
        assert_eq!(stats.win_rate, dec!(66.67));
    }

    #[test]
    fn profit_factor_infinite_without_losses() {
        let trades = [
            trade("2024-01-01", "NQ", Win, dec!(2)),
            trade("2024-01-02", "NQ", Win, dec!(1.5)),
        ];
        let stats = summarize(&trades);
        assert_eq!(stats.profit_factor, ProfitFactor::Infinite);
        assert_eq!(stats.win_rate, dec!(100));
        assert!(stats.is_profitable);
    }

    #[test]
    fn profit_factor_zero_without_wins() {
        let trades = [
            trade("2024-01-01", "NQ", Loss, dec!(2)),
            trade("2024-01-02", "NQ", Loss, dec!(2)),
        ];
        let stats = summarize(&trades);
        assert_eq!(stats.profit_factor, ProfitFactor::Finite(Decimal::ZERO));
        assert_eq!(stats.expected_value, dec!(-1));
        assert!(!stats.is_profitable);
    }

    #[test]
    fn break_even_is_not_profitable() {
        let trades = [
            trade("2024-01-01", "NQ", Win, dec!(1)),
            trade("2024-01-02", "NQ", Loss, dec!(1)),
        ];
        let stats = summarize(&trades);
        assert_eq!(stats.win_rate, dec!(50));
        assert_eq!(stats.avg_risk_reward, dec!(1));
        assert_eq!(stats.expected_value, Decimal::ZERO);
        assert_eq!(stats.profit_factor, ProfitFactor::Finite(dec!(1)));
        assert!(!stats.is_profitable);
    }

    #[test]
    fn derived_values_use_unrounded_inputs() {
        // win rate 2/3, avg R:R (2 + 2 + 1) / 3 = 1.6667
        // EV = 2/3 * 5/3 - 1/3 = 7/9 = 0.777.. -> 0.78
        // PF = (10/9) / (1/3) = 3.333.. -> 3.33
        let trades = [
            trade("2024-01-01", "ES", Win, dec!(2)),
            trade("2024-01-02", "ES", Win, dec!(2)),
            trade("2024-01-03", "ES", Loss, dec!(1)),
        ];
        let stats = summarize(&trades);
        assert_eq!(stats.avg_risk_reward, dec!(1.67));
        assert_eq!(stats.expected_value, dec!(0.78));
        assert_eq!(stats.profit_factor, ProfitFactor::Finite(dec!(3.33)));
    }

    #[test]
    fn only_pending_trades() {
        let trades = [trade("2024-01-01", "NQ", Pending, dec!(3))];
        let stats = summarize(&trades);
        assert_eq!(stats.total_trades, 1);
        assert_eq!(stats.win_rate, Decimal::ZERO);
        assert_eq!(stats.avg_risk_reward, Decimal::ZERO);
        assert_eq!(stats.profit_factor, ProfitFactor::Finite(Decimal::ZERO));
    }

    #[test]
    fn summarize_is_idempotent() {
        let trades = vec![
            trade("2024-01-01", "NQ", Win, dec!(2.5)),
            trade("2024-01-02", "GC", Loss, dec!(1.2)),
            trade("2024-01-03", "NQ", Pending, dec!(3)),
        ];
        let snapshot = trades.clone();
        assert_eq!(summarize(&trades), summarize(&trades));
        assert_eq!(trades, snapshot);
    }

    #[test]
    fn try_summarize_rejects_empty() {
        assert_eq!(try_summarize(&[]), Err(AggregationError::EmptyInput));
    }

    #[test]
    fn try_summarize_rejects_negative_ratio() {
        let bad = trade("2024-01-01", "NQ", Win, dec!(-1));
        let id = bad.id.to_string();
        let err = try_summarize(&[trade("2024-01-01", "NQ", Win, dec!(2)), bad]).unwrap_err();
        assert!(matches!(err, AggregationError::MalformedTrade { trade_id, .. } if trade_id == id));
    }

    #[test]
    fn huge_ratios_do_not_overflow() {
        let huge = dec!(50000000000000000000000000000);
        let trades = [
            trade("2024-01-01", "NQ", Win, huge),
            trade("2024-01-02", "NQ", Win, huge),
        ];
        let stats = summarize(&trades);
        assert_eq!(stats.avg_risk_reward, huge);
        assert_eq!(stats.profit_factor, ProfitFactor::Infinite);
        assert_eq!(try_summarize(&trades), Ok(stats));
    }

    #[test]
    fn profit_factor_beyond_range_saturates() {
        let huge = dec!(50000000000000000000000000000);
        let trades = [
            trade("2024-01-01", "NQ", Win, huge),
            trade("2024-01-02", "NQ", Win, huge),
            trade("2024-01-03", "NQ", Win, huge),
            trade("2024-01-04", "NQ", Loss, Decimal::ZERO),
        ];
        let stats = summarize(&trades);
        assert_eq!(stats.profit_factor, ProfitFactor::Finite(Decimal::MAX));
        assert_eq!(try_summarize(&trades), Err(AggregationError::OutOfRange));
    }

    #[test]
    fn try_summarize_matches_summarize() {
        let trades = [trade("2024-01-01", "NQ", Win, dec!(2))];
        assert_eq!(try_summarize(&trades), Ok(summarize(&trades)));
    }
}
