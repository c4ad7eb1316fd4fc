//! Query Trades Use Case

use std::sync::Arc;

use crate::application::dto::TradeDto;
use crate::application::errors::JournalError;
use crate::domain::access::AuthContext;
use crate::domain::shared::TradeId;
use crate::domain::trade::{TradeError, TradeRepository};

/// Use case for reading journaled trades.
pub struct QueryTradesUseCase<R>
where
    R: TradeRepository,
{
    trade_repo: Arc<R>,
}

impl<R> QueryTradesUseCase<R>
where
    R: TradeRepository,
{
    /// Create a new QueryTradesUseCase.
    pub fn new(trade_repo: Arc<R>) -> Self {
        Self { trade_repo }
    }

    /// The caller's own trades, newest first.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Trade` if the query fails.
    pub async fn list_own(&self, ctx: &AuthContext) -> Result<Vec<TradeDto>, JournalError> {
        let trades = self.trade_repo.find_by_user(ctx.user_id()).await?;
        Ok(trades.iter().map(TradeDto::from).collect())
    }

    /// One trade, visible to its owner and to admins.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the trade does not exist.
    /// - `Forbidden` if the caller may not read it.
    pub async fn get(&self, ctx: &AuthContext, trade_id: &TradeId) -> Result<TradeDto, JournalError> {
        let trade = self
            .trade_repo
            .find_by_id(trade_id)
            .await?
            .ok_or_else(|| TradeError::NotFound {
                trade_id: trade_id.to_string(),
            })?;

        if !ctx.can_access(&trade.user_id) {
            return Err(TradeError::Forbidden {
                trade_id: trade_id.to_string(),
            }
            .into());
        }

        Ok(TradeDto::from(&trade))
    }
}
