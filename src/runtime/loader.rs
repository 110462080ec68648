//! Unit loading and unloading.
//!
//! # Responsibilities
//! - Look up the factory for a unit type
//! - Build the unit's context (names, remappings, params, args, callback queue)
//! - Run the unit's init hook and keep the instance alive
//! - Unload every unit, newest first, at shutdown
//!
//! # Design Decisions
//! - One-shot: a failed load is reported, never retried
//! - Unit names are unique per process
//! - Each load gets a fresh v4 bond id for log correlation

use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::error::LoadError;
use crate::names::{NodeIdentity, PrivateParams, RemapTable};
use crate::observability::metrics;
use crate::runtime::executor::CallbackQueue;
use crate::runtime::nodelet::{Nodelet, UnitContext};
use crate::runtime::registry::UnitRegistry;
use crate::runtime::UnitLoader;

/// Descriptor of a loaded unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitHandle {
    /// Unit name, the fully-qualified node name.
    pub name: String,
    pub unit_type: String,
    pub bond_id: Uuid,
}

struct LoadedUnit {
    handle: UnitHandle,
    unit: Box<dyn Nodelet>,
}

/// Loader that constructs units from a [`UnitRegistry`].
pub struct NodeletLoader {
    registry: UnitRegistry,
    queue: CallbackQueue,
    units: Mutex<Vec<LoadedUnit>>,
}

impl NodeletLoader {
    /// Create a loader whose units post callbacks on `queue`.
    pub fn new(registry: UnitRegistry, queue: CallbackQueue) -> Self {
        Self {
            registry,
            queue,
            units: Mutex::new(Vec::new()),
        }
    }

    /// Handles of the units currently loaded, in load order.
    pub fn loaded(&self) -> Vec<UnitHandle> {
        self.lock().iter().map(|u| u.handle.clone()).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LoadedUnit>> {
        self.units.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UnitLoader for NodeletLoader {
    fn load(
        &self,
        identity: &NodeIdentity,
        unit_type: &str,
        remaps: &RemapTable,
        params: &PrivateParams,
        extra_args: &[String],
    ) -> Result<UnitHandle, LoadError> {
        let name = identity.fully_qualified();
        let mut units = self.lock();

        if units.iter().any(|u| u.handle.name == name) {
            return Err(LoadError::AlreadyLoaded(name));
        }

        let mut unit = self
            .registry
            .create(unit_type)
            .ok_or_else(|| LoadError::UnknownType {
                unit_type: unit_type.to_string(),
                available: self.registry.type_names(),
            })?;

        let handle = UnitHandle {
            name,
            unit_type: unit_type.to_string(),
            bond_id: Uuid::new_v4(),
        };
        let ctx = UnitContext::new(
            identity,
            remaps,
            params,
            extra_args,
            self.queue.clone(),
            handle.bond_id,
        );

        unit.on_init(&ctx).map_err(|source| LoadError::Construction {
            unit_type: unit_type.to_string(),
            source,
        })?;

        metrics::record_unit_loaded(unit_type);
        units.push(LoadedUnit {
            handle: handle.clone(),
            unit,
        });
        Ok(handle)
    }

    fn unload_all(&self) {
        let mut units = self.lock();
        while let Some(mut loaded) = units.pop() {
            loaded.unit.on_shutdown();
            tracing::info!(
                unit = %loaded.handle.name,
                bond_id = %loaded.handle.bond_id,
                "Unit unloaded"
            );
        }
    }
}

impl std::fmt::Debug for NodeletLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeletLoader")
            .field("registry", &self.registry)
            .field("loaded", &self.loaded())
            .finish()
    }
}
