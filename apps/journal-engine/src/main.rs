//! Journal Engine Binary
//!
//! Starts the trade journal HTTP service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin journal-engine
//! ```
//!
//! # Environment Variables
//!
//! - `JOURNAL_CONFIG`: Path to the YAML config (default: `config.yaml`)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`
//!
//! Any `${VAR}` referenced by the config file is read from the environment
//! (and from `.env`, when present).

use std::sync::Arc;

use anyhow::Context;
use journal_engine::application::ports::InMemoryUserDirectory;
use journal_engine::config::{CONFIG_PATH_ENV, Config, DEFAULT_CONFIG_PATH, load_config_or_default};
use journal_engine::infrastructure::config::Container;
use journal_engine::infrastructure::http::create_router;
use journal_engine::infrastructure::persistence::ConfiguredTradeRepository;
use journal_engine::observability::{MetricsConfig, init_metrics, init_tracing};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = load_config_or_default(&config_path)
        .with_context(|| format!("failed to load config from {config_path}"))?;

    init_tracing(&config.observability.logging).context("failed to initialize tracing")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        "Starting journal engine"
    );

    if config.observability.metrics.enabled {
        let metrics = MetricsConfig::try_from(&config.observability.metrics)?;
        init_metrics(&metrics)?;
    }

    let container = create_container(&config).await?;
    let app = create_router(container.app_state(env!("CARGO_PKG_VERSION")));

    let http_addr = config.server.http_addr();
    let listener = TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    tracing::info!(%http_addr, "HTTP server starting");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Journal engine stopped");
    Ok(())
}

/// Wire the configured trade store and user directory.
async fn create_container(
    config: &Config,
) -> anyhow::Result<Container<ConfiguredTradeRepository, InMemoryUserDirectory>> {
    let trade_repo = ConfiguredTradeRepository::from_config(&config.persistence)
        .await
        .context("failed to open trade store")?;
    let directory = InMemoryUserDirectory::from_seeds(&config.users);

    if directory.is_empty() {
        tracing::warn!("No users configured; only the risk-reward calculator is usable");
    }
    tracing::info!(
        backend = trade_repo.backend(),
        users = directory.len(),
        daily_window_days = config.analytics.daily_window_days,
        "Journal wired"
    );

    Ok(Container::new(
        Arc::new(trade_repo),
        Arc::new(directory),
        config.analytics.settings(),
    ))
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
