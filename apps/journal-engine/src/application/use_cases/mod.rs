//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.
//! Each takes the caller's [`AuthContext`] explicitly.

mod admin_overview;
mod build_report;
mod check_risk_reward;
mod manage_users;
mod query_trades;
mod record_trade;
mod update_trade;

pub use admin_overview::AdminOverviewUseCase;
pub use build_report::BuildReportUseCase;
pub use check_risk_reward::CheckRiskRewardUseCase;
pub use manage_users::ManageUsersUseCase;
pub use query_trades::QueryTradesUseCase;
pub use record_trade::RecordTradeUseCase;
pub use update_trade::UpdateTradeUseCase;

use crate::application::errors::JournalError;
use crate::domain::access::AuthContext;
use crate::domain::trade::TradeError;
use crate::observability::record_risk_reward_rejection;

fn require_admin(ctx: &AuthContext) -> Result<(), JournalError> {
    if ctx.is_admin() {
        Ok(())
    } else {
        Err(JournalError::AdminOnly)
    }
}

/// Count validation rejections before passing the error on.
fn note_rejection(err: TradeError) -> TradeError {
    match &err {
        TradeError::InvalidRiskReward(reason) => record_risk_reward_rejection(reason.code()),
        TradeError::NonPositiveRatio => record_risk_reward_rejection("NON_POSITIVE_RATIO"),
        _ => {}
    }
    err
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::application::dto::RecordTradeDto;
    use crate::application::ports::InMemoryUserDirectory;
    use crate::domain::access::{AuthContext, UserProfile, UserRole};
    use crate::domain::shared::UserId;
    use crate::domain::trade::{Market, TradeOutcome, TradeType};
    use crate::infrastructure::persistence::InMemoryTradeRepository;
    use rust_decimal_macros::dec;

    pub fn student(id: &str) -> AuthContext {
        AuthContext::new(UserId::new(id), UserRole::Student)
    }

    pub fn admin() -> AuthContext {
        AuthContext::new(UserId::new("admin"), UserRole::Admin)
    }

    pub fn profile(id: &str, role: UserRole) -> UserProfile {
        UserProfile {
            id: UserId::new(id),
            username: format!("user-{id}"),
            email: format!("{id}@example.com"),
            role,
        }
    }

    pub fn directory() -> Arc<InMemoryUserDirectory> {
        Arc::new(InMemoryUserDirectory::new(vec![
            profile("admin", UserRole::Admin),
            profile("s1", UserRole::Student),
            profile("s2", UserRole::Student),
        ]))
    }

    pub fn repo() -> Arc<InMemoryTradeRepository> {
        Arc::new(InMemoryTradeRepository::new())
    }

    pub fn buy(date: &str, outcome: TradeOutcome) -> RecordTradeDto {
        RecordTradeDto {
            trade_date: date.to_string(),
            market: Market::Futures,
            symbol: "NQ".to_string(),
            trade_type: TradeType::Buy,
            entry_price: dec!(100),
            stop_loss: dec!(90),
            take_profit: dec!(120),
            outcome,
            notes: String::new(),
        }
    }
}
