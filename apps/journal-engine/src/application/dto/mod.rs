//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod report_dto;
mod risk_reward_dto;
mod trade_dto;
mod user_dto;

pub use report_dto::{UserReportDto, UserStatsSummaryDto};
pub use risk_reward_dto::{FieldErrorDto, RiskRewardCheckDto, RiskRewardCheckRequestDto};
pub use trade_dto::{RecordTradeDto, TradeDto, UpdateTradeDto};
pub use user_dto::CreateUserDto;
