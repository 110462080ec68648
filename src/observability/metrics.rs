//! Metrics collection and exposition.
//!
//! # Metrics
//! - `bathy_mapper_units_loaded_total` (counter): units loaded, by type
//! - `bathy_mapper_callbacks_total` (counter): dispatched callbacks, by outcome
//! - `bathy_mapper_lifecycle_state` (gauge): 0=uninitialized, 1=running, 2=terminated
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - The Prometheus endpoint is opt-in via `observability.metrics_enabled`

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::lifecycle::state::LifecycleState;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_unit_loaded(unit_type: &str) {
    ::metrics::counter!("bathy_mapper_units_loaded_total", "unit_type" => unit_type.to_string())
        .increment(1);
}

pub fn record_callback(outcome: &'static str) {
    ::metrics::counter!("bathy_mapper_callbacks_total", "outcome" => outcome).increment(1);
}

pub fn record_lifecycle_state(state: LifecycleState) {
    let value = match state {
        LifecycleState::Uninitialized => 0.0,
        LifecycleState::Running => 1.0,
        LifecycleState::Terminated => 2.0,
    };
    ::metrics::gauge!("bathy_mapper_lifecycle_state").set(value);
}
