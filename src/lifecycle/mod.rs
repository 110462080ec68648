//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Register node → Read remappings → Load unit → Spin
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Dispatch loop returns → Units unloaded → Exit 0
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//!
//! State (state.rs):
//!     Uninitialized → Running → Terminated
//! ```
//!
//! # Design Decisions
//! - Ordered startup: identity first, then unit, then dispatch
//! - Any startup failure moves straight to Terminated
//! - No timeout on loading or on the dispatch loop

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod state;

pub use shutdown::{Shutdown, ShutdownListener};
pub use startup::{BootContext, Bootstrap};
pub use state::{Lifecycle, LifecycleState};
