//! Prometheus metrics for the journal engine.
//!
//! # Example
//!
//! ```ignore
//! use journal_engine::observability::{init_metrics, record_trade_recorded, MetricsConfig};
//!
//! init_metrics(&MetricsConfig::default())?;
//! record_trade_recorded("crypto", "buy");
//! ```

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

use crate::config::MetricsSettings;

/// Configuration for the metrics exporter.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address to bind the metrics HTTP listener.
    pub listen_addr: SocketAddr,
    /// Histogram buckets for report build latency (in seconds).
    pub latency_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
            // Latency buckets from 10us to 100ms
            latency_buckets: vec![0.000_01, 0.000_05, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.1],
        }
    }
}

impl MetricsConfig {
    /// Create a new metrics configuration with custom address.
    #[must_use]
    pub fn with_addr(addr: SocketAddr) -> Self {
        Self {
            listen_addr: addr,
            ..Default::default()
        }
    }
}

impl TryFrom<&MetricsSettings> for MetricsConfig {
    type Error = MetricsError;

    fn try_from(settings: &MetricsSettings) -> Result<Self, Self::Error> {
        let addr = settings
            .listen_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| MetricsError::Configuration(e.to_string()))?;
        Ok(Self::with_addr(addr))
    }
}

/// Initialize the Prometheus metrics exporter.
///
/// This starts an HTTP server that exposes metrics at `/metrics`.
///
/// # Errors
///
/// Returns an error if the metrics exporter fails to start (e.g., port already in use).
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .set_buckets(&config.latency_buckets)
        .map_err(|e| MetricsError::Configuration(e.to_string()))?
        .install()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!(
        addr = %config.listen_addr,
        "Prometheus metrics exporter started"
    );
    Ok(())
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to configure metrics exporter.
    #[error("metrics configuration error: {0}")]
    Configuration(String),
    /// Failed to install metrics exporter.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

// ============================================================================
// Journal Metrics
// ============================================================================

/// Record a newly journaled trade.
///
/// # Arguments
///
/// * `market` - Market segment (e.g., "futures", "crypto")
/// * `trade_type` - Direction ("buy" or "sell")
pub fn record_trade_recorded(market: &str, trade_type: &str) {
    counter!(
        "journal_trades_recorded_total",
        "market" => market.to_string(),
        "type" => trade_type.to_string()
    )
    .increment(1);
}

/// Record an edit to an existing trade.
pub fn record_trade_updated() {
    counter!("journal_trades_updated_total").increment(1);
}

/// Record a trade rejected by risk-reward validation.
///
/// # Arguments
///
/// * `reason` - Error code (e.g., `"INVALID_STOP_LOSS"`, `"ZERO_RISK"`)
pub fn record_risk_reward_rejection(reason: &str) {
    counter!(
        "journal_risk_reward_rejections_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}

/// Record how long a report took to build.
///
/// # Arguments
///
/// * `scope` - `"user"` or `"admin"`
/// * `trades` - Trades in the snapshot
/// * `latency_seconds` - Build duration in seconds
pub fn record_report_build(scope: &str, trades: usize, latency_seconds: f64) {
    histogram!(
        "journal_report_build_seconds",
        "scope" => scope.to_string()
    )
    .record(latency_seconds);
    histogram!(
        "journal_report_trades",
        "scope" => scope.to_string()
    )
    .record(trades as f64);
}
