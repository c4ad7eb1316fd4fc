//! In-memory trade repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::shared::{TradeId, UserId};
use crate::domain::trade::repository::sort_newest_first;
use crate::domain::trade::{Trade, TradeError, TradeRepository};

/// In-memory implementation of `TradeRepository`.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryTradeRepository {
    trades: RwLock<HashMap<String, Trade>>,
}

impl InMemoryTradeRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `trades`.
    #[must_use]
    pub fn with_trades(trades: impl IntoIterator<Item = Trade>) -> Self {
        let map = trades
            .into_iter()
            .map(|t| (t.id.to_string(), t))
            .collect();
        Self {
            trades: RwLock::new(map),
        }
    }

    /// Get the number of trades in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of all trades, unordered.
    pub(crate) fn snapshot(&self) -> Vec<Trade> {
        self.trades
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    fn collect_sorted(&self, keep: impl Fn(&Trade) -> bool) -> Vec<Trade> {
        let mut trades: Vec<Trade> = self
            .trades
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|t| keep(t))
            .cloned()
            .collect();
        sort_newest_first(&mut trades);
        trades
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeRepository {
    async fn save(&self, trade: &Trade) -> Result<(), TradeError> {
        self.trades
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(trade.id.to_string(), trade.clone());
        Ok(())
    }

    async fn replace(&self, trade: &Trade, expected_version: u64) -> Result<(), TradeError> {
        let mut trades = self.trades.write().unwrap_or_else(PoisonError::into_inner);
        let stored = trades
            .get_mut(trade.id.as_str())
            .ok_or_else(|| TradeError::NotFound {
                trade_id: trade.id.to_string(),
            })?;
        if stored.version != expected_version {
            return Err(TradeError::Conflict {
                trade_id: trade.id.to_string(),
            });
        }
        *stored = trade.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>, TradeError> {
        let trades = self.trades.read().unwrap_or_else(PoisonError::into_inner);
        Ok(trades.get(id.as_str()).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Trade>, TradeError> {
        Ok(self.collect_sorted(|t| &t.user_id == user_id))
    }

    async fn find_all(&self) -> Result<Vec<Trade>, TradeError> {
        Ok(self.collect_sorted(|_| true))
    }

    async fn exists(&self, id: &TradeId) -> Result<bool, TradeError> {
        let trades = self.trades.read().unwrap_or_else(PoisonError::into_inner);
        Ok(trades.contains_key(id.as_str()))
    }
}
