//! Analytics configuration.

use serde::{Deserialize, Serialize};

use crate::domain::analytics::{AnalyticsSettings, DEFAULT_DAILY_WINDOW};

/// Analytics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Most recent trading dates shown in the daily series.
    #[serde(default = "default_daily_window")]
    pub daily_window_days: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            daily_window_days: default_daily_window(),
        }
    }
}

impl AnalyticsConfig {
    /// Report settings for the domain.
    #[must_use]
    pub const fn settings(&self) -> AnalyticsSettings {
        AnalyticsSettings {
            daily_window_days: self.daily_window_days,
        }
    }
}

const fn default_daily_window() -> usize {
    DEFAULT_DAILY_WINDOW
}
