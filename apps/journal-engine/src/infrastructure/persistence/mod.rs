//! Persistence Adapters
//!
//! Implementations of `TradeRepository`, selected by configuration.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryTradeRepository;
pub use json_file::JsonFileTradeRepository;

use async_trait::async_trait;

use crate::config::{PersistenceBackend, PersistenceConfig};
use crate::domain::shared::{TradeId, UserId};
use crate::domain::trade::{Trade, TradeError, TradeRepository};

/// The trade store chosen at startup.
#[derive(Debug)]
pub enum ConfiguredTradeRepository {
    /// Process memory.
    Memory(InMemoryTradeRepository),
    /// JSON file on disk.
    File(JsonFileTradeRepository),
}

impl ConfiguredTradeRepository {
    /// Build the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `TradeError::Storage` if the journal file cannot be loaded.
    pub async fn from_config(config: &PersistenceConfig) -> Result<Self, TradeError> {
        match config.backend {
            PersistenceBackend::Memory => Ok(Self::Memory(InMemoryTradeRepository::new())),
            PersistenceBackend::File => Ok(Self::File(
                JsonFileTradeRepository::open(&config.path).await?,
            )),
        }
    }

    /// Backend name, for logging.
    #[must_use]
    pub const fn backend(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::File(_) => "file",
        }
    }

    fn inner(&self) -> &dyn TradeRepository {
        match self {
            Self::Memory(repo) => repo,
            Self::File(repo) => repo,
        }
    }
}

#[async_trait]
impl TradeRepository for ConfiguredTradeRepository {
    async fn save(&self, trade: &Trade) -> Result<(), TradeError> {
        self.inner().save(trade).await
    }

    async fn replace(&self, trade: &Trade, expected_version: u64) -> Result<(), TradeError> {
        self.inner().replace(trade, expected_version).await
    }

    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>, TradeError> {
        self.inner().find_by_id(id).await
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Trade>, TradeError> {
        self.inner().find_by_user(user_id).await
    }

    async fn find_all(&self) -> Result<Vec<Trade>, TradeError> {
        self.inner().find_all().await
    }

    async fn exists(&self, id: &TradeId) -> Result<bool, TradeError> {
        self.inner().exists(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_by_default() {
        let repo = ConfiguredTradeRepository::from_config(&PersistenceConfig::default())
            .await
            .unwrap();
        assert_eq!(repo.backend(), "memory");
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn file_backend_opens_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = PersistenceConfig {
            backend: PersistenceBackend::File,
            path: dir.path().join("trades.json").display().to_string(),
        };

        let repo = ConfiguredTradeRepository::from_config(&config).await.unwrap();
        assert_eq!(repo.backend(), "file");
    }
}
