//! Log subscriber and metrics recorder setup.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, LogFormat};
use crate::error::{AppError, AppResult};

/// Installs the global tracing subscriber described by `config`.
///
/// An invalid filter directive falls back to `info`.
pub fn init_tracing(config: &Config) -> AppResult<()> {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    result.map_err(|e| AppError::Telemetry(e.to_string()))
}

/// Installs the global Prometheus metrics recorder.
pub fn init_metrics() -> AppResult<PrometheusHandle> {
    Ok(PrometheusBuilder::new().install_recorder()?)
}
