//! Aggregation errors.

use thiserror::Error;

/// Why a trade list could not be summarized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// No trades to summarize.
    #[error("no trades to summarize")]
    EmptyInput,

    /// A trade carries values the statistics cannot use.
    #[error("malformed trade {trade_id}: {reason}")]
    MalformedTrade {
        /// Offending trade.
        trade_id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A derived figure does not fit the decimal range.
    #[error("statistics exceed the decimal range")]
    OutOfRange,
}
