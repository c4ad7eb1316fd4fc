//! Update Trade Use Case

use std::sync::Arc;

use crate::application::dto::{TradeDto, UpdateTradeDto};
use crate::application::errors::JournalError;
use crate::domain::access::AuthContext;
use crate::domain::shared::TradeId;
use crate::domain::trade::{TradeError, TradeRepository};
use crate::observability::record_trade_updated;

use super::note_rejection;

/// Use case for editing a journaled trade.
pub struct UpdateTradeUseCase<R>
where
    R: TradeRepository,
{
    trade_repo: Arc<R>,
}

impl<R> UpdateTradeUseCase<R>
where
    R: TradeRepository,
{
    /// Create a new UpdateTradeUseCase.
    pub fn new(trade_repo: Arc<R>) -> Self {
        Self { trade_repo }
    }

    /// Execute the use case.
    ///
    /// Only the owner or an admin may edit. The ratio is re-validated and
    /// recomputed from the edited prices. The write succeeds only if no other
    /// edit was saved since the trade was read.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the trade does not exist.
    /// - `Forbidden` if the caller may not edit it.
    /// - `Conflict` if a concurrent edit won.
    /// - Validation or storage errors from the edit.
    pub async fn execute(
        &self,
        ctx: &AuthContext,
        trade_id: &TradeId,
        request: UpdateTradeDto,
    ) -> Result<TradeDto, JournalError> {
        let mut trade =
            self.trade_repo
                .find_by_id(trade_id)
                .await?
                .ok_or_else(|| TradeError::NotFound {
                    trade_id: trade_id.to_string(),
                })?;

        if !ctx.can_access(&trade.user_id) {
            tracing::warn!(
                trade_id = %trade_id,
                caller = %ctx.user_id(),
                "Trade edit denied"
            );
            return Err(TradeError::Forbidden {
                trade_id: trade_id.to_string(),
            }
            .into());
        }

        let changes = request.to_changes()?;
        let previous_ratio = trade.risk_reward;
        let expected_version = trade.version;
        trade.apply(changes).map_err(note_rejection)?;

        if let Err(err) = self.trade_repo.replace(&trade, expected_version).await {
            if matches!(err, TradeError::Conflict { .. }) {
                tracing::warn!(
                    trade_id = %trade.id,
                    editor = %ctx.user_id(),
                    "Trade edit conflicted with a concurrent edit"
                );
            }
            return Err(err.into());
        }

        record_trade_updated();
        tracing::info!(
            trade_id = %trade.id,
            editor = %ctx.user_id(),
            previous_risk_reward = %previous_ratio,
            risk_reward = %trade.risk_reward,
            version = trade.version,
            "Trade updated"
        );

        Ok(TradeDto::from(&trade))
    }
}
