//! Per-symbol performance.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::math::{mean, percentage};
use super::types::SymbolPerformance;
use crate::domain::shared::Symbol;
use crate::domain::trade::Trade;

#[derive(Default)]
struct SymbolTally {
    trades: u64,
    wins: u64,
    ratios: Vec<Decimal>,
}

/// Group trades by exact symbol.
///
/// Win rate divides by every trade on the symbol, pending included. Results
/// are ordered by trade count, most traded first; symbols with equal counts
/// keep the order in which they first appear.
#[must_use]
pub fn by_symbol(trades: &[Trade]) -> Vec<SymbolPerformance> {
    let mut index: HashMap<&Symbol, usize> = HashMap::new();
    let mut tallies: Vec<(&Symbol, SymbolTally)> = Vec::new();

    for trade in trades {
        let slot = *index.entry(&trade.symbol).or_insert_with(|| {
            tallies.push((&trade.symbol, SymbolTally::default()));
            tallies.len() - 1
        });
        let tally = &mut tallies[slot].1;
        tally.trades += 1;
        tally.ratios.push(trade.risk_reward);
        if trade.outcome.is_win() {
            tally.wins += 1;
        }
    }

    let mut performance: Vec<SymbolPerformance> = tallies
        .into_iter()
        .map(|(symbol, tally)| SymbolPerformance {
            symbol: symbol.clone(),
            trades: tally.trades,
            win_rate: percentage(tally.wins, tally.trades),
            avg_risk_reward: mean(&tally.ratios).unwrap_or(Decimal::MAX),
        })
        .collect();

    performance.sort_by(|a, b| b.trades.cmp(&a.trades));
    performance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::test_support::trade;
    use crate::domain::trade::TradeOutcome::{Loss, Pending, Win};
    use rust_decimal_macros::dec;

    #[test]
    fn orders_by_trade_count() {
        let trades = [
            trade("2024-01-01", "ETH", Win, dec!(2)),
            trade("2024-01-01", "BTC", Win, dec!(2)),
            trade("2024-01-02", "BTC", Loss, dec!(2)),
            trade("2024-01-03", "ETH", Loss, dec!(2)),
            trade("2024-01-04", "BTC", Win, dec!(2)),
        ];
        let symbols: Vec<_> = by_symbol(&trades)
            .into_iter()
            .map(|p| (p.symbol.into_inner(), p.trades))
            .collect();
        assert_eq!(symbols, vec![("BTC".to_string(), 3), ("ETH".to_string(), 2)]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let trades = [
            trade("2024-01-01", "GC", Win, dec!(1)),
            trade("2024-01-01", "NQ", Win, dec!(1)),
            trade("2024-01-01", "CL", Win, dec!(1)),
        ];
        let symbols: Vec<_> = by_symbol(&trades)
            .into_iter()
            .map(|p| p.symbol.into_inner())
            .collect();
        assert_eq!(symbols, vec!["GC", "NQ", "CL"]);
    }

    #[test]
    fn win_rate_counts_pending_in_denominator() {
        let trades = [
            trade("2024-01-01", "NQ", Win, dec!(3)),
            trade("2024-01-02", "NQ", Pending, dec!(1)),
        ];
        let perf = &by_symbol(&trades)[0];
        assert_eq!(perf.win_rate, dec!(50));
        assert_eq!(perf.avg_risk_reward, dec!(2));
    }

    #[test]
    fn grouping_is_case_sensitive() {
        let trades = [
            trade("2024-01-01", "btc", Win, dec!(1)),
            trade("2024-01-01", "BTC", Win, dec!(1)),
        ];
        assert_eq!(by_symbol(&trades).len(), 2);
    }

    #[test]
    fn huge_ratios_do_not_overflow() {
        let huge = dec!(50000000000000000000000000000);
        let trades = [
            trade("2024-01-01", "NQ", Win, huge),
            trade("2024-01-02", "NQ", Win, huge),
        ];
        assert_eq!(by_symbol(&trades)[0].avg_risk_reward, huge);
    }

    #[test]
    fn empty_input() {
        assert!(by_symbol(&[]).is_empty());
    }
}
