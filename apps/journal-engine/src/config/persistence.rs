//! Trade storage configuration.

use serde::{Deserialize, Serialize};

/// Where trades are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    /// Process memory; lost on restart.
    #[default]
    Memory,
    /// A single JSON file.
    File,
}

/// Trade storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Storage backend.
    #[serde(default)]
    pub backend: PersistenceBackend,
    /// Journal file path, used by the `file` backend.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: PersistenceBackend::default(),
            path: default_path(),
        }
    }
}

fn default_path() -> String {
    "./data/trades.json".to_string()
}
