//! Application errors.

use thiserror::Error;

use super::ports::UserDirectoryError;
use crate::domain::analytics::AggregationError;
use crate::domain::trade::TradeError;

/// Errors returned by journal use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// Trade validation, access or storage failure.
    #[error(transparent)]
    Trade(#[from] TradeError),

    /// Operation requires the admin role.
    #[error("Admin role required")]
    AdminOnly,

    /// Referenced user is not in the directory.
    #[error("User not found: {user_id}")]
    UserNotFound {
        /// User ID.
        user_id: String,
    },

    /// User directory failure.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),

    /// Stored trades cannot be summarized.
    #[error("Analytics failed: {0}")]
    Analytics(#[from] AggregationError),

    /// Request field rejected.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

impl JournalError {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Trade(TradeError::NotFound { .. }) => "TRADE_NOT_FOUND",
            Self::Trade(TradeError::Forbidden { .. }) => "FORBIDDEN",
            Self::Trade(TradeError::Conflict { .. }) => "TRADE_CONFLICT",
            Self::Trade(TradeError::InvalidRiskReward(err)) => err.code(),
            Self::Trade(TradeError::NonPositiveRatio) => "NON_POSITIVE_RATIO",
            Self::Trade(TradeError::InvalidField { .. }) => "INVALID_FIELD",
            Self::Trade(TradeError::Storage(_)) => "STORAGE_ERROR",
            Self::AdminOnly => "ADMIN_ONLY",
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
            Self::Directory(UserDirectoryError::AlreadyExists { .. }) => "USER_EXISTS",
            Self::Directory(UserDirectoryError::Unavailable { .. }) => "DIRECTORY_UNAVAILABLE",
            Self::Analytics(_) => "ANALYTICS_ERROR",
            Self::InvalidInput { .. } => "INVALID_FIELD",
        }
    }
}
