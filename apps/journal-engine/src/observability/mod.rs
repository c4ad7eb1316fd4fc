//! Observability module for logging and metrics.
//!
//! Structured logging through `tracing` and Prometheus metrics for trade
//! recording, risk-reward rejections and report builds.

mod metrics;
mod tracing;

pub use self::metrics::{
    MetricsConfig, MetricsError, init_metrics, record_report_build, record_risk_reward_rejection,
    record_trade_recorded, record_trade_updated,
};
pub use self::tracing::{TracingError, init_tracing};
