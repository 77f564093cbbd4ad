//! Prometheus metrics.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::{IntCounter, Registry};

use crate::{Result, ServerError};

lazy_static! {
    /// Calls made to the GitHub API.
    pub static ref GITHUB_API_CALLS: IntCounter =
        IntCounter::new("github_api_calls", "GitHub API calls").unwrap();
    /// Roasts successfully generated.
    pub static ref ROASTS_GENERATED: IntCounter =
        IntCounter::new("roasts_generated", "Roasts generated").unwrap();
}

/// Build the metrics middleware, serving `/metrics`.
pub fn build_metrics_handler() -> Result<PrometheusMetrics> {
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(|e| ServerError::MetricsError {
            message: e.to_string(),
        })?;

    setup_process_metrics(&prometheus.registry)?;
    register(&prometheus.registry, &GITHUB_API_CALLS)?;
    register(&prometheus.registry, &ROASTS_GENERATED)?;

    Ok(prometheus)
}

fn register(registry: &Registry, counter: &IntCounter) -> Result<()> {
    registry
        .register(Box::new(counter.clone()))
        .map_err(|e| ServerError::MetricsError {
            message: e.to_string(),
        })
}

#[cfg(target_os = "linux")]
fn setup_process_metrics(registry: &Registry) -> Result<()> {
    use prometheus::process_collector::ProcessCollector;

    registry
        .register(Box::new(ProcessCollector::for_self()))
        .map_err(|e| ServerError::MetricsError {
            message: e.to_string(),
        })
}

#[cfg(not(target_os = "linux"))]
fn setup_process_metrics(_registry: &Registry) -> Result<()> {
    tracing::debug!(message = "Process metrics are only supported on Linux");
    Ok(())
}
