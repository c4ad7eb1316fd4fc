//! Dependency Injection Container
//!
//! Manages creation and wiring of all application components.

use std::sync::Arc;

use crate::application::ports::UserDirectoryPort;
use crate::application::use_cases::{
    AdminOverviewUseCase, BuildReportUseCase, CheckRiskRewardUseCase, ManageUsersUseCase,
    QueryTradesUseCase, RecordTradeUseCase, UpdateTradeUseCase,
};
use crate::domain::analytics::AnalyticsSettings;
use crate::domain::trade::TradeRepository;
use crate::infrastructure::http::AppState;

/// Dependency injection container.
///
/// Holds the wired ports and hands out use cases built on them.
pub struct Container<R, U>
where
    R: TradeRepository + 'static,
    U: UserDirectoryPort + 'static,
{
    trade_repo: Arc<R>,
    directory: Arc<U>,
    settings: AnalyticsSettings,
}

impl<R, U> Container<R, U>
where
    R: TradeRepository + 'static,
    U: UserDirectoryPort + 'static,
{
    /// Create a new container with all dependencies.
    pub fn new(trade_repo: Arc<R>, directory: Arc<U>, settings: AnalyticsSettings) -> Self {
        Self {
            trade_repo,
            directory,
            settings,
        }
    }

    /// Get the trade repository.
    pub fn trade_repo(&self) -> Arc<R> {
        Arc::clone(&self.trade_repo)
    }

    /// Get the user directory.
    pub fn directory(&self) -> Arc<U> {
        Arc::clone(&self.directory)
    }

    /// Create a `RecordTradeUseCase`.
    pub fn record_trade_use_case(&self) -> RecordTradeUseCase<R> {
        RecordTradeUseCase::new(Arc::clone(&self.trade_repo))
    }

    /// Create an `UpdateTradeUseCase`.
    pub fn update_trade_use_case(&self) -> UpdateTradeUseCase<R> {
        UpdateTradeUseCase::new(Arc::clone(&self.trade_repo))
    }

    /// Create a `QueryTradesUseCase`.
    pub fn query_trades_use_case(&self) -> QueryTradesUseCase<R> {
        QueryTradesUseCase::new(Arc::clone(&self.trade_repo))
    }

    /// Create a `BuildReportUseCase`.
    pub fn build_report_use_case(&self) -> BuildReportUseCase<R, U> {
        BuildReportUseCase::new(
            Arc::clone(&self.trade_repo),
            Arc::clone(&self.directory),
            self.settings,
        )
    }

    /// Create an `AdminOverviewUseCase`.
    pub fn admin_overview_use_case(&self) -> AdminOverviewUseCase<R, U> {
        AdminOverviewUseCase::new(Arc::clone(&self.trade_repo), Arc::clone(&self.directory))
    }

    /// Create a `ManageUsersUseCase`.
    pub fn manage_users_use_case(&self) -> ManageUsersUseCase<U> {
        ManageUsersUseCase::new(Arc::clone(&self.directory))
    }

    /// HTTP state wired with every use case.
    pub fn app_state(&self, version: impl Into<String>) -> AppState<R, U> {
        AppState {
            record_trade: Arc::new(self.record_trade_use_case()),
            update_trade: Arc::new(self.update_trade_use_case()),
            query_trades: Arc::new(self.query_trades_use_case()),
            build_report: Arc::new(self.build_report_use_case()),
            admin_overview: Arc::new(self.admin_overview_use_case()),
            manage_users: Arc::new(self.manage_users_use_case()),
            check_risk_reward: CheckRiskRewardUseCase::new(),
            directory: Arc::clone(&self.directory),
            version: version.into(),
        }
    }
}
