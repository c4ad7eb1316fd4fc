//! Qualitative rating of a reward-to-risk ratio.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

const EXCELLENT_THRESHOLD: Decimal = Decimal::from_parts(15, 0, 0, false, 1); // 1.5

/// How attractive a ratio is, as shown next to the live calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskRewardRating {
    /// Ratio of at least 1.5.
    Excellent,
    /// Ratio of at least 1.
    Good,
    /// Anything below 1.
    Poor,
}

impl RiskRewardRating {
    /// Rate a ratio.
    #[must_use]
    pub fn from_ratio(ratio: Decimal) -> Self {
        if ratio >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if ratio >= Decimal::ONE {
            Self::Good
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for RiskRewardRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "excellent"),
            Self::Good => write!(f, "good"),
            Self::Poor => write!(f, "poor"),
        }
    }
}
