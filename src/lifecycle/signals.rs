//! OS signal handling.
//!
//! # Responsibilities
//! - Register signal handlers (SIGTERM, SIGINT)
//! - Translate the first signal into a shutdown trigger
//! - Force the process out on a repeated signal
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Handlers are installed before the dispatch loop starts; failure to install is fatal
//! - Multiple SIGTERM/SIGINT triggers forced shutdown

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::Shutdown;

/// Exit status used when a repeated signal cuts shutdown short.
pub const FORCED_EXIT_CODE: i32 = 1;

/// What to do about the n-th shutdown signal (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalAction {
    /// Start a graceful shutdown.
    Shutdown,
    /// Graceful shutdown is already under way; exit now.
    ForceExit,
}

impl SignalAction {
    pub fn for_count(count: u32) -> Self {
        if count <= 1 {
            SignalAction::Shutdown
        } else {
            SignalAction::ForceExit
        }
    }
}

fn handle(shutdown: &Shutdown, count: u32, signal: &'static str) {
    match SignalAction::for_count(count) {
        SignalAction::Shutdown => {
            tracing::info!(signal, "Shutdown signal received");
            shutdown.trigger();
        }
        SignalAction::ForceExit => {
            tracing::warn!(signal, count, "Repeated shutdown signal, forcing exit");
            std::process::exit(FORCED_EXIT_CODE);
        }
    }
}

/// Install SIGINT/SIGTERM handlers that trigger `shutdown`.
#[cfg(unix)]
pub fn install(shutdown: Shutdown) -> std::io::Result<JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(tokio::spawn(async move {
        let mut count = 0;
        loop {
            let name = tokio::select! {
                Some(()) = interrupt.recv() => "SIGINT",
                Some(()) = terminate.recv() => "SIGTERM",
                else => break,
            };
            count += 1;
            handle(&shutdown, count, name);
        }
    }))
}

/// Install a Ctrl+C handler that triggers `shutdown`.
#[cfg(not(unix))]
pub fn install(shutdown: Shutdown) -> std::io::Result<JoinHandle<()>> {
    Ok(tokio::spawn(async move {
        let mut count = 0;
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                shutdown.trigger();
                return;
            }
            count += 1;
            handle(&shutdown, count, "ctrl-c");
        }
    }))
}
