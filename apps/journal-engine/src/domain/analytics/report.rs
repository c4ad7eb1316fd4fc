//! Full analytics report for one trade snapshot.

use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_DAILY_WINDOW;
use super::distribution::rr_distribution;
use super::errors::AggregationError;
use super::statistics::{summarize, try_summarize};
use super::symbols::by_symbol;
use super::timeseries::{by_date_window, streak};
use super::types::{DailyActivity, RiskRewardBucket, StreakPoint, SymbolPerformance, TradeStats};
use crate::domain::trade::Trade;

/// Tunables for report building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSettings {
    /// Number of most recent dates in the daily series.
    pub daily_window_days: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            daily_window_days: DEFAULT_DAILY_WINDOW,
        }
    }
}

/// Every analytics view computed from the same trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalReport {
    /// Aggregate statistics.
    pub stats: TradeStats,
    /// Per-symbol performance.
    pub by_symbol: Vec<SymbolPerformance>,
    /// Daily activity.
    pub daily: Vec<DailyActivity>,
    /// Cumulative streak.
    pub streak: Vec<StreakPoint>,
    /// R:R distribution.
    pub rr_distribution: Vec<RiskRewardBucket>,
}

impl JournalReport {
    /// Build a report from a trade snapshot.
    #[must_use]
    pub fn build(trades: &[Trade], settings: &AnalyticsSettings) -> Self {
        Self::with_stats(summarize(trades), trades, settings)
    }

    /// Build a report, rejecting malformed trades and out-of-range figures.
    /// An empty snapshot yields the all-zero report.
    ///
    /// # Errors
    ///
    /// `MalformedTrade` or `OutOfRange` from the statistics.
    pub fn try_build(
        trades: &[Trade],
        settings: &AnalyticsSettings,
    ) -> Result<Self, AggregationError> {
        let stats = match try_summarize(trades) {
            Ok(stats) => stats,
            Err(AggregationError::EmptyInput) => TradeStats::default(),
            Err(err) => return Err(err),
        };
        Ok(Self::with_stats(stats, trades, settings))
    }

    fn with_stats(stats: TradeStats, trades: &[Trade], settings: &AnalyticsSettings) -> Self {
        Self {
            stats,
            by_symbol: by_symbol(trades),
            daily: by_date_window(trades, settings.daily_window_days),
            streak: streak(trades),
            rr_distribution: rr_distribution(trades).to_vec(),
        }
    }
}
