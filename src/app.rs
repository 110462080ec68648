//! Process wiring: config → runtime services → bootstrap.

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::lifecycle::{signals, Bootstrap, Shutdown};
use crate::observability::metrics;
use crate::runtime::{Executor, Master, NodeletLoader, UnitRegistry};

/// Run the host process until a shutdown signal arrives.
///
/// Returns the number of callbacks dispatched.
pub async fn run(config: BootstrapConfig, argv: &[String]) -> Result<u64, BootstrapError> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let _signals = signals::install(shutdown.clone())?;

    run_with(config, argv, UnitRegistry::with_defaults(), shutdown).await
}

/// Run with an explicit unit registry and shutdown coordinator.
pub async fn run_with(
    config: BootstrapConfig,
    argv: &[String],
    registry: UnitRegistry,
    shutdown: Shutdown,
) -> Result<u64, BootstrapError> {
    let master = Master::new(&config.node.namespace);
    let mut executor = Executor::new(&shutdown);
    let loader = NodeletLoader::new(registry, executor.queue());

    let mut bootstrap = Bootstrap::new();
    let ctx = bootstrap.initialize(&master, argv, &config.node.name)?;
    bootstrap
        .load_and_run(
            &loader,
            &mut executor,
            ctx,
            &config.unit.unit_type,
            &config.unit.args,
        )
        .await
}
