//! Node identity within the middleware namespace.

use std::fmt;

use crate::names::resolve::{join, normalize_namespace};

/// Name of this process in the communication graph.
///
/// Established once at registration and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeIdentity {
    name: String,
    namespace: String,
}

impl NodeIdentity {
    /// Create an identity. The namespace is normalised to absolute form.
    ///
    /// Callers are expected to have validated `name` as a base name.
    pub fn new(name: impl Into<String>, namespace: &str) -> Self {
        Self {
            name: name.into(),
            namespace: normalize_namespace(namespace),
        }
    }

    /// Base name, e.g. `bathy_mapper_server`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute namespace, `/` for the root.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Namespace-qualified name, e.g. `/bathy_mapper_server`.
    pub fn fully_qualified(&self) -> String {
        join(&self.namespace, &self.name)
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fully_qualified())
    }
}
