//! In-process middleware runtime.
//!
//! # Data Flow
//! ```text
//! argv ─▶ master.rs (NameService)   ─▶ NodeIdentity + RemapTable
//!                                            │
//!                                            ▼
//!         loader.rs (UnitLoader)    ─▶ registry.rs factory ─▶ Nodelet::on_init
//!                                            │ posts callbacks
//!                                            ▼
//!         executor.rs (Dispatcher)  ─▶ runs callbacks until Shutdown fires
//! ```
//!
//! # Design Decisions
//! - The bootstrap only sees the three traits below, so tests can swap any of them
//! - Unit types are selected by string key from a factory registry
//! - The executor never exits on an idle queue, only on shutdown

pub mod executor;
pub mod loader;
pub mod master;
pub mod nodelet;
pub mod registry;

use std::future::Future;

use crate::error::{LoadError, RegistrationError};
use crate::names::{NodeIdentity, PrivateParams, RemapTable};

pub use executor::{CallbackQueue, Executor};
pub use loader::{NodeletLoader, UnitHandle};
pub use master::Master;
pub use nodelet::{Nodelet, UnitContext};
pub use registry::UnitRegistry;

/// Identity/namespace and name-resolution service.
pub trait NameService {
    /// Register a node under `name_literal`, or the `__name:=` override in `argv`.
    fn register(&self, name_literal: &str, argv: &[String])
        -> Result<NodeIdentity, RegistrationError>;

    /// Remappings recorded for `identity` at registration.
    fn current_remappings(&self, identity: &NodeIdentity) -> RemapTable;

    /// Private parameters (`_key:=value`) recorded for `identity`, keyed as `~key`.
    fn private_params(&self, identity: &NodeIdentity) -> PrivateParams;
}

/// Plugin-loading facility.
pub trait UnitLoader {
    /// Construct and initialize a unit of type `unit_type` for `identity`.
    fn load(
        &self,
        identity: &NodeIdentity,
        unit_type: &str,
        remaps: &RemapTable,
        params: &PrivateParams,
        extra_args: &[String],
    ) -> Result<UnitHandle, LoadError>;

    /// Release every loaded unit, most recent first.
    fn unload_all(&self);
}

/// Event-dispatch facility.
pub trait Dispatcher {
    /// Service callbacks until shutdown is signaled. Returns the number dispatched.
    fn spin(&mut self) -> impl Future<Output = u64> + Send;
}
