//! Record Trade Use Case

use std::sync::Arc;

use crate::application::dto::{RecordTradeDto, TradeDto};
use crate::application::errors::JournalError;
use crate::domain::access::AuthContext;
use crate::domain::trade::{Trade, TradeRepository};
use crate::observability::record_trade_recorded;

use super::note_rejection;

/// Use case for journaling a new trade for the caller.
pub struct RecordTradeUseCase<R>
where
    R: TradeRepository,
{
    trade_repo: Arc<R>,
}

impl<R> RecordTradeUseCase<R>
where
    R: TradeRepository,
{
    /// Create a new RecordTradeUseCase.
    pub fn new(trade_repo: Arc<R>) -> Self {
        Self { trade_repo }
    }

    /// Execute the use case.
    ///
    /// The trade is owned by the caller and its ratio is derived from the
    /// submitted prices.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Trade` if validation or storage fails.
    pub async fn execute(
        &self,
        ctx: &AuthContext,
        request: RecordTradeDto,
    ) -> Result<TradeDto, JournalError> {
        let new_trade = request.to_new_trade()?;
        let trade = Trade::record(new_trade, ctx.user_id().clone()).map_err(note_rejection)?;

        self.trade_repo.save(&trade).await?;

        record_trade_recorded(trade.market.as_str(), &trade.trade_type.to_string());
        tracing::info!(
            trade_id = %trade.id,
            user_id = %trade.user_id,
            symbol = %trade.symbol,
            risk_reward = %trade.risk_reward,
            "Trade recorded"
        );

        Ok(TradeDto::from(&trade))
    }
}
