//! Prometheus metrics

use crate::rest::{RequestEvent, RequestObserver};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::{Ipv4Addr, SocketAddr};

/// Request counter, labelled by method and outcome
pub const REQUESTS_TOTAL: &str = "ftx_requests_total";
/// Request latency histogram, labelled by method
pub const REQUEST_LATENCY_MS: &str = "ftx_request_latency_ms";

/// Records one counter and one latency sample per call
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObserver;

impl RequestObserver for MetricsObserver {
    fn on_response(&self, event: &RequestEvent<'_>) {
        let method = event.method.as_str();

        metrics::counter!(
            REQUESTS_TOTAL,
            "method" => method,
            "outcome" => event.outcome_label()
        )
        .increment(1);

        metrics::histogram!(REQUEST_LATENCY_MS, "method" => method)
            .record(event.elapsed.as_secs_f64() * 1000.0);
    }
}

/// Serve metrics on `0.0.0.0:<port>/metrics`
pub fn install_prometheus_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus exporter: {}", e))?;

    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}
