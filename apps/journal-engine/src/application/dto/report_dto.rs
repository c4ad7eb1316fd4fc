//! Report DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::access::UserProfile;
use crate::domain::analytics::{JournalReport, TradeStats};

/// One student's headline numbers on the admin overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatsSummaryDto {
    /// User ID.
    pub user_id: String,
    /// Display name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// All trades, pending included.
    pub total_trades: u64,
    /// Win rate over completed trades, in percent.
    pub win_rate: Decimal,
    /// Mean R:R over completed trades.
    pub avg_risk_reward: Decimal,
    /// Expected R per trade.
    pub expected_value: Decimal,
}

impl UserStatsSummaryDto {
    /// Combine a profile with its statistics.
    #[must_use]
    pub fn new(user: &UserProfile, stats: &TradeStats) -> Self {
        Self {
            user_id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            total_trades: stats.total_trades,
            win_rate: stats.win_rate,
            avg_risk_reward: stats.avg_risk_reward,
            expected_value: stats.expected_value,
        }
    }
}

/// A user's full report, as viewed by an admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReportDto {
    /// The user.
    pub user: UserProfile,
    /// Their analytics.
    pub report: JournalReport,
}
