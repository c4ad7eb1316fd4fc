//! Performance analytics over a snapshot of journal trades.
//!
//! Every function here is pure: it takes `&[Trade]`, allocates its result
//! and holds no state, so repeated calls on the same slice return identical
//! output.
//!
//! - Trade statistics (win rate, average R:R, expected value, profit factor)
//! - Per-symbol performance
//! - Daily activity and cumulative win/loss streak series
//! - R:R distribution buckets

mod constants;
mod distribution;
mod errors;
mod format;
mod math;
mod report;
mod statistics;
mod symbols;
mod timeseries;
mod types;

pub use constants::DEFAULT_DAILY_WINDOW;
pub use distribution::rr_distribution;
pub use errors::AggregationError;
pub use format::{format_pct, format_profit_factor, format_ratio};
pub use report::{AnalyticsSettings, JournalReport};
pub use statistics::{summarize, try_summarize};
pub use symbols::by_symbol;
pub use timeseries::{by_date, by_date_window, streak};
pub use types::{
    DailyActivity, ProfitFactor, RiskRewardBucket, StreakPoint, SymbolPerformance, TradeStats,
};

#[cfg(test)]
pub(crate) mod test_support;
