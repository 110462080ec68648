//! Processing unit contract.

use uuid::Uuid;

use crate::error::UnitError;
use crate::names::{NameResolver, NodeIdentity, PrivateParams, RemapTable};
use crate::runtime::executor::CallbackQueue;

/// A processing unit hosted inside the process.
///
/// Units are constructed by a factory with no arguments and receive everything
/// they need in [`Nodelet::on_init`]. Endpoint names must be resolved there;
/// the remap table is not offered again later.
pub trait Nodelet: Send {
    /// Set up endpoints and post initial callbacks.
    fn on_init(&mut self, ctx: &UnitContext) -> Result<(), UnitError>;

    /// Called once when the unit is unloaded at shutdown.
    fn on_shutdown(&mut self) {}
}

/// Everything a unit receives at construction.
#[derive(Debug, Clone)]
pub struct UnitContext {
    name: String,
    identity: NodeIdentity,
    remaps: RemapTable,
    params: PrivateParams,
    args: Vec<String>,
    resolver: NameResolver,
    queue: CallbackQueue,
    bond_id: Uuid,
}

impl UnitContext {
    pub fn new(
        identity: &NodeIdentity,
        remaps: &RemapTable,
        params: &PrivateParams,
        args: &[String],
        queue: CallbackQueue,
        bond_id: Uuid,
    ) -> Self {
        Self {
            name: identity.fully_qualified(),
            identity: identity.clone(),
            remaps: remaps.clone(),
            params: params.clone(),
            args: args.to_vec(),
            resolver: NameResolver::new(identity, remaps),
            queue,
            bond_id,
        }
    }

    /// Unit name, the fully-qualified node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identity(&self) -> &NodeIdentity {
        &self.identity
    }

    pub fn remaps(&self) -> &RemapTable {
        &self.remaps
    }

    /// Private parameter from a `_key:=value` argument. `key` may be given
    /// with or without the leading `~`.
    pub fn param(&self, key: &str) -> Option<&str> {
        let key = key.strip_prefix('~').unwrap_or(key);
        self.params.get(&format!("~{}", key)).map(String::as_str)
    }

    /// Extra arguments from the `unit.args` config entry.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Resolve an endpoint name and apply remappings.
    pub fn resolve_name(&self, name: &str) -> String {
        self.resolver.remap(name)
    }

    /// Queue serviced by the dispatch loop.
    pub fn queue(&self) -> &CallbackQueue {
        &self.queue
    }

    pub fn bond_id(&self) -> Uuid {
        self.bond_id
    }
}
