//! Build Report Use Case

use std::sync::Arc;
use std::time::Instant;

use crate::application::dto::UserReportDto;
use crate::application::errors::JournalError;
use crate::application::ports::UserDirectoryPort;
use crate::domain::access::AuthContext;
use crate::domain::analytics::{AnalyticsSettings, JournalReport};
use crate::domain::shared::UserId;
use crate::domain::trade::{Trade, TradeRepository};
use crate::observability::record_report_build;

use super::require_admin;

/// Use case for building analytics reports.
pub struct BuildReportUseCase<R, U>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    trade_repo: Arc<R>,
    directory: Arc<U>,
    settings: AnalyticsSettings,
}

impl<R, U> BuildReportUseCase<R, U>
where
    R: TradeRepository,
    U: UserDirectoryPort,
{
    /// Create a new BuildReportUseCase.
    pub fn new(trade_repo: Arc<R>, directory: Arc<U>, settings: AnalyticsSettings) -> Self {
        Self {
            trade_repo,
            directory,
            settings,
        }
    }

    /// Report over the caller's own trades.
    ///
    /// # Errors
    ///
    /// - `JournalError::Trade` if the trades cannot be loaded.
    /// - `JournalError::Analytics` if a stored trade cannot be summarized.
    pub async fn for_caller(&self, ctx: &AuthContext) -> Result<JournalReport, JournalError> {
        let trades = self.trade_repo.find_by_user(ctx.user_id()).await?;
        self.build("user", &trades)
    }

    /// Report over another user's trades. Admin only.
    ///
    /// # Errors
    ///
    /// - `AdminOnly` for non-admin callers.
    /// - `UserNotFound` if the user is not in the directory.
    /// - `Analytics` if a stored trade cannot be summarized.
    pub async fn for_user(
        &self,
        ctx: &AuthContext,
        user_id: &UserId,
    ) -> Result<UserReportDto, JournalError> {
        require_admin(ctx)?;

        let user = self
            .directory
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| JournalError::UserNotFound {
                user_id: user_id.to_string(),
            })?;

        let trades = self.trade_repo.find_by_user(user_id).await?;
        let report = self.build("admin", &trades)?;
        Ok(UserReportDto { user, report })
    }

    fn build(&self, scope: &str, trades: &[Trade]) -> Result<JournalReport, JournalError> {
        let started = Instant::now();
        let report = JournalReport::try_build(trades, &self.settings).inspect_err(|err| {
            tracing::warn!(scope, trades = trades.len(), error = %err, "Report aggregation failed");
        })?;
        let elapsed = started.elapsed().as_secs_f64();

        record_report_build(scope, trades.len(), elapsed);
        tracing::debug!(
            scope,
            trades = trades.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Report built"
        );
        Ok(report)
    }
}
