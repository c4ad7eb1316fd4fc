//! Trade Repository Trait
//!
//! Persistence abstraction for journal trades.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Trade;
use super::errors::TradeError;
use crate::domain::shared::{TradeId, UserId};

/// Repository trait for trade persistence.
///
/// Listing methods return trades newest first: by `trade_date` descending,
/// then by `created_at` descending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// Save a trade (insert or update).
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save(&self, trade: &Trade) -> Result<(), TradeError>;

    /// Replace a stored trade, provided it is still at `expected_version`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the trade is not stored.
    /// - `Conflict` if the stored version differs.
    /// - Persistence failures.
    async fn replace(&self, trade: &Trade, expected_version: u64) -> Result<(), TradeError>;

    /// Find a trade by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>, TradeError>;

    /// All trades owned by a user.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Trade>, TradeError>;

    /// Every trade in the journal.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_all(&self) -> Result<Vec<Trade>, TradeError>;

    /// Check if a trade exists.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn exists(&self, id: &TradeId) -> Result<bool, TradeError>;
}

/// Order trades newest first.
pub fn sort_newest_first(trades: &mut [Trade]) {
    trades.sort_by(|a, b| {
        b.trade_date
            .cmp(&a.trade_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}
