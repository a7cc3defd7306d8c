//! Prometheus metrics exposition
//!
//! Installs the pull-based scrape endpoint. The exporter answers
//! scrapes from the last-published gauge values on its own listener;
//! it never participates in the sampling loop's control flow.

use anyhow::Context;
use metrics::describe_gauge;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::info;

use crate::core::monitor::SPREAD_DELTA_GAUGE;

/// Install the Prometheus exporter on the given port.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .context("failed to install Prometheus exporter")?;

    describe_gauge!(
        SPREAD_DELTA_GAUGE,
        "Absolute delta of the bid/ask price spread between two samples"
    );

    info!(port, "Prometheus exporter listening");
    Ok(())
}
