//! Startup orchestration.
//!
//! # Responsibilities
//! - Register the node and capture its remappings and private parameters
//! - Load the processing unit with identity and remappings
//! - Hand control to the dispatch loop until shutdown
//! - Unload units once the loop returns
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, no retries
//! - Steps run strictly in order on the calling task
//! - The remap table is complete before the unit is constructed

use crate::error::BootstrapError;
use crate::lifecycle::state::{Lifecycle, LifecycleState};
use crate::names::{NodeIdentity, PrivateParams, RemapTable};
use crate::runtime::{Dispatcher, NameService, UnitLoader};

/// Immutable output of initialization, consumed by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootContext {
    identity: NodeIdentity,
    remaps: RemapTable,
    params: PrivateParams,
}

impl BootContext {
    pub fn identity(&self) -> &NodeIdentity {
        &self.identity
    }

    pub fn remaps(&self) -> &RemapTable {
        &self.remaps
    }

    /// Private parameters, keyed as `~key`.
    pub fn params(&self) -> &PrivateParams {
        &self.params
    }
}

/// Drives one process through register → load → spin.
#[derive(Debug, Default)]
pub struct Bootstrap {
    lifecycle: Lifecycle,
}

impl Bootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Register under `node_name` (or the argv override) and read back remappings.
    pub fn initialize<N>(
        &mut self,
        names: &N,
        argv: &[String],
        node_name: &str,
    ) -> Result<BootContext, BootstrapError>
    where
        N: NameService + ?Sized,
    {
        let identity = match names.register(node_name, argv) {
            Ok(identity) => identity,
            Err(e) => {
                self.lifecycle.fail()?;
                return Err(e.into());
            }
        };
        let remaps = names.current_remappings(&identity);
        let params = names.private_params(&identity);

        tracing::info!(
            node = %identity,
            remaps = %remaps,
            params = params.len(),
            "Runtime initialized"
        );
        Ok(BootContext {
            identity,
            remaps,
            params,
        })
    }

    /// Load `unit_type` and block in the dispatch loop until shutdown.
    ///
    /// Returns the number of callbacks dispatched. A load failure returns
    /// before the dispatch loop is entered.
    pub async fn load_and_run<L, D>(
        &mut self,
        loader: &L,
        dispatcher: &mut D,
        ctx: BootContext,
        unit_type: &str,
        extra_args: &[String],
    ) -> Result<u64, BootstrapError>
    where
        L: UnitLoader + ?Sized,
        D: Dispatcher,
    {
        let handle = match loader.load(
            &ctx.identity,
            unit_type,
            &ctx.remaps,
            &ctx.params,
            extra_args,
        ) {
            Ok(handle) => handle,
            Err(e) => {
                self.lifecycle.fail()?;
                return Err(e.into());
            }
        };
        tracing::info!(
            unit = %handle.name,
            unit_type = %handle.unit_type,
            bond_id = %handle.bond_id,
            "Unit loaded"
        );

        self.lifecycle.start()?;
        let dispatched = dispatcher.spin().await;

        loader.unload_all();
        self.lifecycle.terminate()?;
        Ok(dispatched)
    }
}
