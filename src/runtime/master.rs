//! Node identity registry.
//!
//! # Responsibilities
//! - Parse the process argv into remappings, specials and private parameters
//! - Pick the node name and namespace (argv overrides win)
//! - Reject duplicate fully-qualified names
//! - Answer remapping queries for registered nodes
//!
//! # Design Decisions
//! - Registrations live for the whole process; there is no unregister
//! - Backed by DashMap so concurrent registrations cannot race

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::RegistrationError;
use crate::names::resolve::{normalize_namespace, validate_base_name};
use crate::names::{NodeArgs, NodeIdentity, PrivateParams, RemapTable};
use crate::runtime::NameService;

/// What the registry knows about one node.
#[derive(Debug, Clone)]
struct NodeRecord {
    remaps: RemapTable,
    params: PrivateParams,
}

/// In-process identity and name-resolution service.
#[derive(Debug)]
pub struct Master {
    namespace: String,
    nodes: DashMap<String, NodeRecord>,
}

impl Master {
    /// Create a registry whose nodes default to `namespace`.
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: normalize_namespace(namespace),
            nodes: DashMap::new(),
        }
    }

    /// Returns true if `fully_qualified` is registered.
    pub fn is_registered(&self, fully_qualified: &str) -> bool {
        self.nodes.contains_key(fully_qualified)
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Master {
    fn default() -> Self {
        Self::new("/")
    }
}

impl NameService for Master {
    fn register(
        &self,
        name_literal: &str,
        argv: &[String],
    ) -> Result<NodeIdentity, RegistrationError> {
        let args = NodeArgs::parse(argv)?;

        let name = args.name_override().unwrap_or(name_literal);
        validate_base_name(name).map_err(|reason| RegistrationError::InvalidName {
            name: name.to_string(),
            reason,
        })?;
        let namespace = args.namespace_override().unwrap_or(self.namespace.as_str());
        let identity = NodeIdentity::new(name, namespace);
        let fully_qualified = identity.fully_qualified();

        match self.nodes.entry(fully_qualified.clone()) {
            Entry::Occupied(_) => {
                return Err(RegistrationError::DuplicateName(fully_qualified));
            }
            Entry::Vacant(slot) => {
                slot.insert(NodeRecord {
                    remaps: args.remaps().clone(),
                    params: args.params().clone(),
                });
            }
        }

        tracing::info!(
            node = %identity,
            remaps = args.remaps().len(),
            params = args.params().len(),
            "Node registered"
        );
        Ok(identity)
    }

    fn current_remappings(&self, identity: &NodeIdentity) -> RemapTable {
        self.nodes
            .get(&identity.fully_qualified())
            .map(|record| record.remaps.clone())
            .unwrap_or_default()
    }

    fn private_params(&self, identity: &NodeIdentity) -> PrivateParams {
        self.nodes
            .get(&identity.fully_qualified())
            .map(|record| record.params.clone())
            .unwrap_or_default()
    }
}
