//! Daily activity and cumulative streak series.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::constants::DEFAULT_DAILY_WINDOW;
use super::math::{percentage, round_display};
use super::types::{DailyActivity, StreakPoint};
use crate::domain::trade::Trade;

#[derive(Default)]
struct DayTally {
    trades: u64,
    wins: u64,
    losses: u64,
}

/// Daily activity for the 7 most recent trading dates, oldest first.
#[must_use]
pub fn by_date(trades: &[Trade]) -> Vec<DailyActivity> {
    by_date_window(trades, DEFAULT_DAILY_WINDOW)
}

/// Daily activity for the `window` most recent trading dates, oldest first.
///
/// Win rate per day excludes pending trades from the denominator.
#[must_use]
pub fn by_date_window(trades: &[Trade], window: usize) -> Vec<DailyActivity> {
    let mut days: BTreeMap<NaiveDate, DayTally> = BTreeMap::new();
    for trade in trades {
        let tally = days.entry(trade.trade_date).or_default();
        tally.trades += 1;
        if trade.outcome.is_win() {
            tally.wins += 1;
        } else if trade.outcome.is_loss() {
            tally.losses += 1;
        }
    }

    let skip = days.len().saturating_sub(window);
    days.into_iter()
        .skip(skip)
        .map(|(date, tally)| DailyActivity {
            date,
            trade_count: tally.trades,
            win_rate: round_display(percentage(tally.wins, tally.wins + tally.losses)),
        })
        .collect()
}

/// Cumulative wins minus losses over completed trades in date order.
///
/// Trades on the same date replay in recording order; exact ties keep
/// their input order.
#[must_use]
pub fn streak(trades: &[Trade]) -> Vec<StreakPoint> {
    let mut completed: Vec<&Trade> = trades.iter().filter(|t| t.outcome.is_completed()).collect();
    completed.sort_by_key(|t| (t.trade_date, t.created_at));

    let mut cumulative = 0_i64;
    completed
        .into_iter()
        .zip(1_u64..)
        .map(|(trade, sequence_index)| {
            if trade.outcome.is_win() {
                cumulative += 1;
            } else if trade.outcome.is_loss() {
                cumulative -= 1;
            }
            StreakPoint {
                sequence_index,
                date: trade.trade_date,
                outcome: trade.outcome,
                cumulative,
            }
        })
        .collect()
}
