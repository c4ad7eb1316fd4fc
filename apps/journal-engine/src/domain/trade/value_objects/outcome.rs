//! Trade outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a trade as recorded by the trader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeOutcome {
    /// Target reached.
    Win,
    /// Stop hit.
    Loss,
    /// Still open or not yet recorded.
    #[default]
    Pending,
}

impl TradeOutcome {
    /// Win or loss; pending trades are not completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns true for wins.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win)
    }

    /// Returns true for losses.
    #[must_use]
    pub const fn is_loss(&self) -> bool {
        matches!(self, Self::Loss)
    }
}

impl fmt::Display for TradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Pending => write!(f, "pending"),
        }
    }
}
