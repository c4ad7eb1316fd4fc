//! Live risk-reward check DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::risk_reward::{RiskRewardCalculator, RiskRewardError, RiskRewardRating};
use crate::domain::trade::TradeType;

/// A partially filled trade form.
///
/// Prices may be JSON numbers, strings, null or absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRewardCheckRequestDto {
    /// Direction.
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    /// Entry price as entered.
    #[serde(default)]
    pub entry_price: Option<Value>,
    /// Stop loss as entered.
    #[serde(default)]
    pub stop_loss: Option<Value>,
    /// Take profit as entered.
    #[serde(default)]
    pub take_profit: Option<Value>,
}

impl RiskRewardCheckRequestDto {
    /// Raw text of a price field; anything but a number or string is blank.
    #[must_use]
    pub fn raw_text(value: Option<&Value>) -> String {
        match value {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        }
    }
}

/// Field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorDto {
    /// Error code.
    pub code: String,
    /// Field to correct.
    pub field: String,
    /// Message shown next to the field.
    pub message: String,
}

impl From<&RiskRewardError> for FieldErrorDto {
    fn from(err: &RiskRewardError) -> Self {
        Self {
            code: err.code().to_string(),
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result of a live check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRewardCheckDto {
    /// `ok`, `invalid` or `indeterminate`.
    pub status: String,
    /// Computed ratio, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reward: Option<Decimal>,
    /// Value the form stores with the record: the ratio or zero.
    pub stored_value: Decimal,
    /// Rating of the ratio, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<RiskRewardRating>,
    /// Validation message, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldErrorDto>,
}

impl RiskRewardCheckDto {
    /// Build from a calculator result.
    #[must_use]
    pub fn from_result(result: &Result<Option<Decimal>, RiskRewardError>) -> Self {
        let stored_value = RiskRewardCalculator::ratio_or_zero(result);
        match result {
            Ok(Some(ratio)) => Self {
                status: "ok".to_string(),
                risk_reward: Some(*ratio),
                stored_value,
                rating: Some(RiskRewardRating::from_ratio(*ratio)),
                error: None,
            },
            Ok(None) => Self {
                status: "indeterminate".to_string(),
                risk_reward: None,
                stored_value,
                rating: None,
                error: None,
            },
            Err(err) => Self {
                status: "invalid".to_string(),
                risk_reward: None,
                stored_value,
                rating: None,
                error: Some(FieldErrorDto::from(err)),
            },
        }
    }
}
