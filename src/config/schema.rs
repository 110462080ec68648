//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the bootstrap.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Node name used when neither the config nor `__name:=` overrides it.
pub const DEFAULT_NODE_NAME: &str = "bathy_mapper_server";

/// Processing unit loaded when the config does not name another one.
pub const DEFAULT_UNIT_TYPE: &str = "bathy_mapper/BathyMapperNodelet";

/// Root configuration for the bootstrap.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Node identity defaults.
    pub node: NodeConfig,

    /// Processing unit selection.
    pub unit: UnitConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Node identity defaults. `__name:=` and `__ns:=` take precedence.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Base node name.
    pub name: String,

    /// Namespace the node registers under.
    pub namespace: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NODE_NAME.to_string(),
            namespace: "/".to_string(),
        }
    }
}

/// Processing unit configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UnitConfig {
    /// Registered unit type, `package/Type`.
    #[serde(rename = "type")]
    pub unit_type: String,

    /// Extra arguments handed to the unit at construction.
    pub args: Vec<String>,
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            unit_type: DEFAULT_UNIT_TYPE.to_string(),
            args: Vec::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
