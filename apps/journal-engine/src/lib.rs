// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::or_fun_call
    )
)]

//! Journal Engine - Rust Core Library
//!
//! Trade journal for discretionary traders: records trades, validates their
//! risk-reward geometry and derives performance analytics.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `trade`: Trade aggregate, market/direction/outcome value objects, repository port
//!   - `risk_reward`: Reward-to-risk calculator and rating
//!   - `analytics`: Statistics, per-symbol performance, daily series, streak, distribution
//!   - `access`: Users, roles and the caller's `AuthContext`
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `UserDirectoryPort`
//!   - `use_cases`: `RecordTrade`, `UpdateTrade`, `QueryTrades`, `BuildReport`,
//!     `AdminOverview`, `CheckRiskReward`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: Trade stores (in-memory, JSON file)
//!   - `http`: REST API
//!   - `config`: Dependency injection container

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Logging and metrics.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::access::{AuthContext, UserProfile, UserRole};
pub use domain::analytics::{
    AnalyticsSettings, JournalReport, ProfitFactor, SymbolPerformance, TradeStats, by_date,
    by_symbol, streak, summarize, try_summarize,
};
pub use domain::risk_reward::{RiskRewardCalculator, RiskRewardError, RiskRewardRating};
pub use domain::shared::{Symbol, TradeId, UserId};
pub use domain::trade::{Market, Trade, TradeOutcome, TradeRepository, TradeType};

// Application re-exports
pub use application::JournalError;
pub use application::ports::{InMemoryUserDirectory, UserDirectoryPort};
pub use application::use_cases::{
    AdminOverviewUseCase, BuildReportUseCase, CheckRiskRewardUseCase, ManageUsersUseCase,
    QueryTradesUseCase, RecordTradeUseCase, UpdateTradeUseCase,
};

// Infrastructure re-exports
pub use infrastructure::config::Container;
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::{
    ConfiguredTradeRepository, InMemoryTradeRepository, JsonFileTradeRepository,
};
