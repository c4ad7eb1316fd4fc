//! Risk-reward validation errors.

use thiserror::Error;

use crate::domain::trade::TradeType;

/// Price levels that cannot produce a reward-to-risk ratio.
///
/// Messages are phrased for the field a trader would correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RiskRewardError {
    /// Stop loss on the wrong side of the entry.
    #[error("Stop loss should be {} entry price for {trade_type} orders", stop_side(.trade_type))]
    InvalidStopLoss {
        /// Direction the stop was validated against.
        trade_type: TradeType,
    },

    /// Take profit on the wrong side of the entry.
    #[error("Take profit should be {} entry price for {trade_type} orders", target_side(.trade_type))]
    InvalidTakeProfit {
        /// Direction the target was validated against.
        trade_type: TradeType,
    },

    /// Entry equals stop loss.
    #[error("Risk cannot be zero (entry price equals stop loss)")]
    ZeroRisk,

    /// Prices too far apart for the ratio to be represented.
    #[error("Prices are out of range for a risk-reward ratio")]
    OutOfRange,
}

impl RiskRewardError {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidStopLoss { .. } => "INVALID_STOP_LOSS",
            Self::InvalidTakeProfit { .. } => "INVALID_TAKE_PROFIT",
            Self::ZeroRisk => "ZERO_RISK",
            Self::OutOfRange => "PRICE_OUT_OF_RANGE",
        }
    }

    /// Form field the error belongs to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidStopLoss { .. } | Self::ZeroRisk => "stop_loss",
            Self::InvalidTakeProfit { .. } => "take_profit",
            Self::OutOfRange => "entry_price",
        }
    }
}

const fn stop_side(trade_type: &TradeType) -> &'static str {
    match trade_type {
        TradeType::Buy => "below",
        TradeType::Sell => "above",
    }
}

const fn target_side(trade_type: &TradeType) -> &'static str {
    match trade_type {
        TradeType::Buy => "above",
        TradeType::Sell => "below",
    }
}
