//! Trade errors.

use thiserror::Error;

use crate::domain::risk_reward::RiskRewardError;
use crate::domain::shared::DomainError;

/// Errors raised while recording, editing or loading trades.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
    /// No trade with this ID.
    #[error("Trade not found: {trade_id}")]
    NotFound {
        /// Trade ID.
        trade_id: String,
    },

    /// Caller may not access this trade.
    #[error("Access to trade {trade_id} denied")]
    Forbidden {
        /// Trade ID.
        trade_id: String,
    },

    /// Another edit was saved since the trade was read.
    #[error("Trade {trade_id} was modified concurrently")]
    Conflict {
        /// Trade ID.
        trade_id: String,
    },

    /// Price levels do not form a valid trade.
    #[error(transparent)]
    InvalidRiskReward(#[from] RiskRewardError),

    /// Valid levels whose ratio rounds to zero.
    #[error("Risk reward ratio must be greater than zero")]
    NonPositiveRatio,

    /// Invalid field value.
    #[error("Invalid value for '{field}': {message}")]
    InvalidField {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Persistence failure.
    #[error("Trade storage error: {0}")]
    Storage(String),
}

impl TradeError {
    /// Shorthand for [`TradeError::InvalidField`].
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<DomainError> for TradeError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { field, message } => Self::InvalidField { field, message },
            DomainError::NotFound { id, .. } => Self::NotFound { trade_id: id },
        }
    }
}
