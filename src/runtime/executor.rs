//! Callback queue and the dispatch loop that services it.
//!
//! # Responsibilities
//! - Accept callbacks posted by loaded units
//! - Run them in arrival order on the spinning task
//! - Return only when shutdown is signaled
//!
//! # Design Decisions
//! - Callback errors belong to the unit: logged and counted, never propagated
//! - The executor keeps its own sender, so an empty queue never ends the loop
//! - Shutdown is checked before each callback; pending callbacks are dropped

use tokio::sync::mpsc;

use crate::error::UnitError;
use crate::lifecycle::shutdown::{Shutdown, ShutdownListener};
use crate::observability::metrics;
use crate::runtime::Dispatcher;

/// Work item posted by a unit.
pub type Callback = Box<dyn FnOnce() -> Result<(), UnitError> + Send>;

/// Cloneable handle for posting callbacks to the executor.
#[derive(Clone)]
pub struct CallbackQueue {
    tx: mpsc::UnboundedSender<Callback>,
}

impl CallbackQueue {
    /// Enqueue `callback`. Dropped silently once the executor is gone.
    pub fn post<F>(&self, callback: F)
    where
        F: FnOnce() -> Result<(), UnitError> + Send + 'static,
    {
        if self.tx.send(Box::new(callback)).is_err() {
            tracing::debug!("Executor gone, callback dropped");
        }
    }
}

impl std::fmt::Debug for CallbackQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackQueue")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// Single-task dispatch loop.
pub struct Executor {
    queue: CallbackQueue,
    rx: mpsc::UnboundedReceiver<Callback>,
    shutdown: ShutdownListener,
}

impl Executor {
    /// Create an executor that stops when `shutdown` fires.
    ///
    /// Subscribes immediately, so a shutdown triggered before `spin` is still seen.
    pub fn new(shutdown: &Shutdown) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            queue: CallbackQueue { tx },
            rx,
            shutdown: shutdown.subscribe(),
        }
    }

    /// Handle for units to post callbacks on.
    pub fn queue(&self) -> CallbackQueue {
        self.queue.clone()
    }
}

impl Dispatcher for Executor {
    async fn spin(&mut self) -> u64 {
        let mut dispatched = 0u64;
        tracing::info!("Dispatch loop started");

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown.recv() => break,

                Some(callback) = self.rx.recv() => {
                    dispatched += 1;
                    match callback() {
                        Ok(()) => metrics::record_callback("ok"),
                        Err(e) => {
                            tracing::warn!(error = %e, "Callback failed");
                            metrics::record_callback("error");
                        }
                    }
                }
            }
        }

        tracing::info!(dispatched, "Dispatch loop stopped");
        dispatched
    }
}
