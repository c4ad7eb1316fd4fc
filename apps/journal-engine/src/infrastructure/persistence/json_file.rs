//! JSON file trade repository.
//!
//! The whole journal lives in one JSON array. Reads are served from memory;
//! every write rewrites the file through a sibling temp file and a rename.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::in_memory::InMemoryTradeRepository;
use crate::domain::shared::{TradeId, UserId};
use crate::domain::trade::repository::sort_newest_first;
use crate::domain::trade::{Trade, TradeError, TradeRepository};

/// File-backed implementation of `TradeRepository`.
#[derive(Debug)]
pub struct JsonFileTradeRepository {
    path: PathBuf,
    cache: InMemoryTradeRepository,
    write_lock: Mutex<()>,
}

impl JsonFileTradeRepository {
    /// Open the journal at `path`, loading existing trades.
    ///
    /// A missing file is an empty journal; it is created on first save.
    /// Every loaded trade is re-validated; a stored ratio that no longer
    /// matches the prices is replaced by the recomputed one.
    ///
    /// # Errors
    ///
    /// Returns `TradeError::Storage` if the file exists but cannot be read
    /// or parsed, or holds a trade whose fields fail validation.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, TradeError> {
        let path = path.into();
        let mut trades = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice::<Vec<Trade>>(&bytes).map_err(|e| {
                storage_error(&path, "parse", &e)
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(storage_error(&path, "read", &e)),
        };

        for trade in &mut trades {
            let check = trade.audit().map_err(|e| {
                storage_error(&path, "validate", &format!("trade {}: {e}", trade.id))
            })?;
            if !check.is_consistent() {
                tracing::warn!(
                    trade_id = %trade.id,
                    stored = %check.stored,
                    computed = %check.computed,
                    "Stored risk-reward ratio drifted, using recomputed value"
                );
                trade.risk_reward = check.computed;
            }
        }

        tracing::info!(
            path = %path.display(),
            trades = trades.len(),
            "Trade journal loaded"
        );

        Ok(Self {
            path,
            cache: InMemoryTradeRepository::with_trades(trades),
            write_lock: Mutex::new(()),
        })
    }

    /// Journal file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, trades: &[Trade]) -> Result<(), TradeError> {
        let json = serde_json::to_vec_pretty(trades)
            .map_err(|e| storage_error(&self.path, "serialize", &e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error(parent, "create directory", &e))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| storage_error(&tmp, "write", &e))?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(storage_error(&self.path, "replace", &e));
        }
        Ok(())
    }
}

fn storage_error(path: &Path, action: &str, err: &dyn std::fmt::Display) -> TradeError {
    tracing::error!(path = %path.display(), action, error = %err, "Trade journal I/O failed");
    TradeError::Storage(format!("failed to {action} {}: {err}", path.display()))
}

#[async_trait]
impl TradeRepository for JsonFileTradeRepository {
    async fn save(&self, trade: &Trade) -> Result<(), TradeError> {
        let _guard = self.write_lock.lock().await;

        let mut trades: Vec<Trade> = self
            .cache
            .snapshot()
            .into_iter()
            .filter(|t| t.id != trade.id)
            .collect();
        trades.push(trade.clone());
        sort_newest_first(&mut trades);

        self.persist(&trades).await?;
        self.cache.save(trade).await
    }

    async fn replace(&self, trade: &Trade, expected_version: u64) -> Result<(), TradeError> {
        let _guard = self.write_lock.lock().await;

        let mut trades = self.cache.snapshot();
        let stored = trades
            .iter_mut()
            .find(|t| t.id == trade.id)
            .ok_or_else(|| TradeError::NotFound {
                trade_id: trade.id.to_string(),
            })?;
        if stored.version != expected_version {
            return Err(TradeError::Conflict {
                trade_id: trade.id.to_string(),
            });
        }
        *stored = trade.clone();
        sort_newest_first(&mut trades);

        self.persist(&trades).await?;
        self.cache.replace(trade, expected_version).await
    }

    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>, TradeError> {
        self.cache.find_by_id(id).await
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Trade>, TradeError> {
        self.cache.find_by_user(user_id).await
    }

    async fn find_all(&self) -> Result<Vec<Trade>, TradeError> {
        self.cache.find_all().await
    }

    async fn exists(&self, id: &TradeId) -> Result<bool, TradeError> {
        self.cache.exists(id).await
    }
}
