//! Check Risk-Reward Use Case
//!
//! Live validation of a partially filled trade form.

use crate::application::dto::{RiskRewardCheckDto, RiskRewardCheckRequestDto};
use crate::domain::risk_reward::{PriceInputs, RiskRewardCalculator};

/// Stateless use case behind the live calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckRiskRewardUseCase;

impl CheckRiskRewardUseCase {
    /// Create a new CheckRiskRewardUseCase.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluate the form. Never fails: invalid and incomplete input are
    /// reported in the result.
    #[must_use]
    pub fn execute(&self, request: &RiskRewardCheckRequestDto) -> RiskRewardCheckDto {
        let entry = RiskRewardCheckRequestDto::raw_text(request.entry_price.as_ref());
        let stop_loss = RiskRewardCheckRequestDto::raw_text(request.stop_loss.as_ref());
        let take_profit = RiskRewardCheckRequestDto::raw_text(request.take_profit.as_ref());

        let inputs = PriceInputs {
            entry: &entry,
            stop_loss: &stop_loss,
            take_profit: &take_profit,
        };
        let result = RiskRewardCalculator::evaluate(&inputs, request.trade_type);
        RiskRewardCheckDto::from_result(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk_reward::RiskRewardRating;
    use crate::domain::trade::TradeType;
    use rust_decimal_macros::dec;

    fn request(value: serde_json::Value) -> RiskRewardCheckRequestDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn valid_buy() {
        let dto = CheckRiskRewardUseCase::new().execute(&request(serde_json::json!({
            "type": "buy",
            "entry_price": 100,
            "stop_loss": "90",
            "take_profit": 120
        })));
        assert_eq!(dto.status, "ok");
        assert_eq!(dto.risk_reward, Some(dec!(2)));
        assert_eq!(dto.rating, Some(RiskRewardRating::Excellent));
    }

    #[test]
    fn incomplete_form_is_indeterminate() {
        let dto = CheckRiskRewardUseCase::new().execute(&request(serde_json::json!({
            "type": "sell",
            "entry_price": "100"
        })));
        assert_eq!(dto.status, "indeterminate");
        assert!(dto.error.is_none());
        assert_eq!(dto.stored_value, dec!(0));
    }

    #[test]
    fn out_of_range_prices_are_invalid() {
        let dto = CheckRiskRewardUseCase::new().execute(&request(serde_json::json!({
            "type": "buy",
            "entry_price": "0.0000000000000000000000000002",
            "stop_loss": "0.0000000000000000000000000001",
            "take_profit": "79228162514264337593543950335"
        })));
        assert_eq!(dto.status, "invalid");
        assert_eq!(dto.stored_value, dec!(0));
        assert_eq!(dto.error.map(|e| e.code), Some("PRICE_OUT_OF_RANGE".to_string()));
    }

    #[test]
    fn sell_ratio_rounds_and_bad_target_names_field() {
        let dto = CheckRiskRewardUseCase::new().execute(&RiskRewardCheckRequestDto {
            trade_type: TradeType::Sell,
            entry_price: Some(serde_json::json!(100)),
            stop_loss: Some(serde_json::json!(110)),
            take_profit: Some(serde_json::json!(94.5)),
        });
        assert_eq!(dto.status, "ok");
        assert_eq!(dto.risk_reward, Some(dec!(0.55)));
        assert_eq!(dto.rating, Some(RiskRewardRating::Poor));

        let dto = CheckRiskRewardUseCase::new().execute(&RiskRewardCheckRequestDto {
            trade_type: TradeType::Sell,
            entry_price: Some(serde_json::json!(100)),
            stop_loss: Some(serde_json::json!(90)),
            take_profit: Some(serde_json::json!(80)),
        });
        let error = dto.error.unwrap();
        assert_eq!(error.field, "stop_loss");
        assert_eq!(
            error.message,
            "Stop loss should be above entry price for sell orders"
        );
    }
}
