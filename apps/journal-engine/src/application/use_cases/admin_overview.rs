//! Admin Overview Use Case

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::UserStatsSummaryDto;
use crate::application::errors::JournalError;
use crate::application::ports::UserDirectoryPort;
use crate::domain::access::{AuthContext, UserRole};
use crate::domain::analytics::summarize;
use crate::domain::shared::UserId;
use crate::domain::trade::{Trade, TradeRepository};

use super::require_admin;

/// Use case listing every student with their headline statistics.
pub struct AdminOverviewUseCase<R, U>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    trade_repo: Arc<R>,
    directory: Arc<U>,
}

impl<R, U> AdminOverviewUseCase<R, U>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    /// Create a new AdminOverviewUseCase.
    pub fn new(trade_repo: Arc<R>, directory: Arc<U>) -> Self {
        Self {
            trade_repo,
            directory,
        }
    }

    /// Execute the use case. Students appear in directory order, including
    /// those without trades.
    ///
    /// # Errors
    ///
    /// - `AdminOnly` for non-admin callers.
    /// - Directory or storage failures.
    pub async fn execute(&self, ctx: &AuthContext) -> Result<Vec<UserStatsSummaryDto>, JournalError> {
        require_admin(ctx)?;

        let students = self.directory.list_by_role(UserRole::Student).await?;
        let trades = self.trade_repo.find_all().await?;

        let mut by_user: HashMap<&UserId, Vec<Trade>> = HashMap::new();
        for trade in &trades {
            by_user
                .entry(&trade.user_id)
                .or_default()
                .push(trade.clone());
        }

        let summaries = students
            .iter()
            .map(|student| {
                let own = by_user.get(&student.id).map_or(&[][..], Vec::as_slice);
                UserStatsSummaryDto::new(student, &summarize(own))
            })
            .collect::<Vec<_>>();

        tracing::info!(
            admin = %ctx.user_id(),
            students = summaries.len(),
            trades = trades.len(),
            "Admin overview built"
        );
        Ok(summaries)
    }
}
