//! Trade direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    /// Long position.
    #[serde(alias = "long")]
    Buy,
    /// Short position.
    #[serde(alias = "short")]
    Sell,
}

impl TradeType {
    /// Returns true for long trades.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self, Self::Buy)
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}
