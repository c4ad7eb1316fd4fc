//! Date-only parsing for trade dates.
//!
//! Trade dates arrive either as `YYYY-MM-DD` or as a full timestamp
//! (`2024-03-01T14:30:00Z`). Only the calendar date is kept.

use chrono::NaiveDate;
use thiserror::Error;

/// Error parsing a trade date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid trade date '{input}': expected YYYY-MM-DD")]
pub struct TradeDateError {
    /// The rejected input.
    pub input: String,
}

/// Parse a trade date, discarding any time-of-day portion.
///
/// # Errors
///
/// Returns `TradeDateError` if the date portion is not `YYYY-MM-DD`.
pub fn parse_trade_date(input: &str) -> Result<NaiveDate, TradeDateError> {
    let trimmed = input.trim();
    let date_part = trimmed
        .split_once('T')
        .map_or(trimmed, |(date, _)| date)
        .split_whitespace()
        .next()
        .unwrap_or_default();

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| TradeDateError {
        input: input.to_string(),
    })
}

/// Serde adapter: serialize as `YYYY-MM-DD`, deserialize via [`parse_trade_date`].
pub(crate) mod serde_trade_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_trade_date(&raw).map_err(serde::de::Error::custom)
    }
}
