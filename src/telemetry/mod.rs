//! Telemetry module
//!
//! Logging and metrics

mod logging;
mod recorder;

pub use logging::{init_logging, LogFormat};
pub use recorder::{
    install_prometheus_exporter, MetricsObserver, REQUESTS_TOTAL, REQUEST_LATENCY_MS,
};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)?;

    if let Some(port) = config.metrics_port {
        install_prometheus_exporter(port)?;
    }

    Ok(())
}
