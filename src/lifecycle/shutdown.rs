//! Shutdown coordination for the bootstrap.

use std::sync::Arc;

use tokio::sync::watch;

/// Coordinator for process shutdown.
///
/// Backed by a watch channel rather than a broadcast: listeners created after
/// the trigger still observe it, so a signal that arrives before the dispatch
/// loop starts is never lost.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Get the number of active listeners.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half of [`Shutdown`].
#[derive(Debug)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    /// Wait until shutdown is triggered.
    ///
    /// Also returns if every coordinator handle is dropped, since nothing can
    /// trigger it afterwards.
    pub async fn recv(&mut self) {
        loop {
            let triggered = *self.rx.borrow_and_update();
            if triggered || self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}
