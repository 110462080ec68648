//! Error taxonomy for the bootstrap.
//!
//! Every error here is fatal at this layer: it is logged once in `main`
//! and turned into a non-zero exit status.

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::lifecycle::state::LifecycleState;

/// Errors raised while registering the process with the identity service.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Another node already holds this fully-qualified name.
    #[error("Node name {0} is already registered")]
    DuplicateName(String),

    /// A node name, namespace or remap side is not a legal graph name.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// A `key:=value` argument could not be understood.
    #[error("Malformed argument '{0}'")]
    MalformedArgument(String),
}

/// Error raised by a processing unit, during construction or in a callback.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UnitError(pub String);

impl UnitError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Errors raised while loading a processing unit.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No factory is registered for the requested type.
    #[error("Unit type '{unit_type}' is not registered (available: {})", available.join(", "))]
    UnknownType {
        unit_type: String,
        available: Vec<String>,
    },

    /// The factory or the unit's init hook failed.
    #[error("Unit type '{unit_type}' failed to initialize: {source}")]
    Construction {
        unit_type: String,
        #[source]
        source: UnitError,
    },

    /// A unit with this name is already loaded in the process.
    #[error("A unit named {0} is already loaded")]
    AlreadyLoaded(String),
}

/// Illegal lifecycle transition.
#[derive(Debug, Error)]
#[error("Illegal lifecycle transition {from:?} -> {to:?}")]
pub struct LifecycleError {
    pub from: LifecycleState,
    pub to: LifecycleState,
}

/// Top-level bootstrap error.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registration failed: {0}")]
    Registration(#[from] RegistrationError),

    #[error("Unit load failed: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("Runtime error: {0}")]
    Io(#[from] std::io::Error),
}

impl BootstrapError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
