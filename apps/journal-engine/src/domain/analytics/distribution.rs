//! R:R distribution.

use rust_decimal::Decimal;

use super::constants::{ONE_AND_HALF, THREE, TWO};
use super::types::RiskRewardBucket;
use crate::domain::trade::Trade;

/// Bucket labels, lowest range first.
pub const BUCKET_LABELS: [&str; 5] = ["<1", "1-1.5", "1.5-2", "2-3", ">3"];

fn bucket_index(ratio: Decimal) -> usize {
    if ratio < Decimal::ONE {
        0
    } else if ratio < ONE_AND_HALF {
        1
    } else if ratio < TWO {
        2
    } else if ratio < THREE {
        3
    } else {
        4
    }
}

/// Count every trade, pending included, into its R:R bucket.
///
/// Lower bounds are inclusive; a ratio of exactly 3 lands in `>3`.
#[must_use]
pub fn rr_distribution(trades: &[Trade]) -> [RiskRewardBucket; 5] {
    let mut counts = [0_u64; 5];
    for trade in trades {
        counts[bucket_index(trade.risk_reward)] += 1;
    }

    std::array::from_fn(|i| RiskRewardBucket {
        label: BUCKET_LABELS[i].to_string(),
        count: counts[i],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::test_support::trade;
    use crate::domain::trade::TradeOutcome::{Pending, Win};
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(dec!(0.5) => "<1")]
    #[test_case(dec!(0.99) => "<1")]
    #[test_case(dec!(1) => "1-1.5")]
    #[test_case(dec!(1.49) => "1-1.5")]
    #[test_case(dec!(1.5) => "1.5-2")]
    #[test_case(dec!(2) => "2-3")]
    #[test_case(dec!(2.99) => "2-3")]
    #[test_case(dec!(3) => ">3")]
    #[test_case(dec!(7.25) => ">3")]
    fn bucket_boundaries(ratio: Decimal) -> &'static str {
        BUCKET_LABELS[bucket_index(ratio)]
    }

    #[test]
    fn counts_all_trades() {
        let trades = [
            trade("2024-01-01", "NQ", Win, dec!(2)),
            trade("2024-01-02", "NQ", Pending, dec!(2.5)),
            trade("2024-01-03", "NQ", Win, dec!(0.8)),
        ];
        let buckets = rr_distribution(&trades);
        let counts: Vec<_> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 0, 0, 2, 0]);
        assert_eq!(buckets[3].label, "2-3");
    }

    #[test]
    fn empty_input_has_all_buckets() {
        let buckets = rr_distribution(&[]);
        assert_eq!(buckets.len(), 5);
        assert!(buckets.iter().all(|b| b.count == 0));
    }
}
