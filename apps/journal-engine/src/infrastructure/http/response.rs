//! HTTP response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::analytics::{
    JournalReport, TradeStats, format_pct, format_profit_factor, format_ratio,
};
use crate::domain::trade::Market;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Offending form field, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// One market in the entry form catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketResponse {
    /// Market.
    pub market: Market,
    /// Preselected symbol.
    pub default_symbol: String,
    /// Offered symbols.
    pub trading_pairs: Vec<String>,
}

impl From<Market> for MarketResponse {
    fn from(market: Market) -> Self {
        Self {
            market,
            default_symbol: market.default_symbol().to_string(),
            trading_pairs: market
                .trading_pairs()
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

/// Headline numbers formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDisplay {
    /// e.g. `66.67%`.
    pub win_rate: String,
    /// e.g. `2.00`.
    pub avg_risk_reward: String,
    /// e.g. `1.00`.
    pub expected_value: String,
    /// e.g. `1.50` or `∞`.
    pub profit_factor: String,
}

impl From<&TradeStats> for StatsDisplay {
    fn from(stats: &TradeStats) -> Self {
        Self {
            win_rate: format_pct(stats.win_rate),
            avg_risk_reward: format_ratio(stats.avg_risk_reward),
            expected_value: format_ratio(stats.expected_value),
            profit_factor: format_profit_factor(&stats.profit_factor),
        }
    }
}

/// Analytics report plus display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Raw report.
    #[serde(flatten)]
    pub report: JournalReport,
    /// Formatted headline.
    pub display: StatsDisplay,
}

impl From<JournalReport> for StatsResponse {
    fn from(report: JournalReport) -> Self {
        let display = StatsDisplay::from(&report.stats);
        Self { report, display }
    }
}
