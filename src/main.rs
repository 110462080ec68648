//! Bathymetry mapper server.
//!
//! # Architecture Overview
//!
//! ```text
//!   argv ──▶ strip middleware args ──▶ clap ──▶ config (TOML, optional)
//!     │                                             │
//!     │                                             ▼
//!     │         ┌──────────────────────────────────────────────────┐
//!     └────────▶│  Runtime Initializer                             │
//!               │    Master::register(name, argv) → NodeIdentity   │
//!               │    Master::current_remappings  → RemapTable      │
//!               │    Master::private_params      → PrivateParams   │
//!               └───────────────────────┬──────────────────────────┘
//!                                       │ BootContext
//!                                       ▼
//!               ┌──────────────────────────────────────────────────┐
//!               │  Unit Loader & Dispatcher                        │
//!               │    NodeletLoader::load("bathy_mapper/...")       │
//!               │    Executor::spin() until SIGINT/SIGTERM         │
//!               └──────────────────────────────────────────────────┘
//! ```
//!
//! Exit status is 0 after a signaled shutdown, 1 if the config is invalid, the
//! node cannot be registered or the unit cannot be loaded (or a second signal
//! forces exit), and 2 on a command-line usage error.

use std::process::ExitCode;

use bathy_mapper::app;
use bathy_mapper::cli::Cli;
use bathy_mapper::config::load_or_default;
use bathy_mapper::observability::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let cli = match Cli::try_parse_argv(&argv) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let mut config = match load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bathy_mapper_server: configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    init_logging(&config.observability.log_level);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        node = %config.node.name,
        unit_type = %config.unit.unit_type,
        "bathy_mapper_server starting"
    );

    match app::run(config, &argv).await {
        Ok(dispatched) => {
            tracing::info!(dispatched, "Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Bootstrap failed");
            ExitCode::from(e.exit_code())
        }
    }
}
