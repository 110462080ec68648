//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Node name and namespace follow graph naming rules
//! - Unit type has the `package/Type` shape
//! - Observability values are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BootstrapConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::BootstrapConfig;
use crate::names::resolve::{validate_base_name, validate_namespace};

/// Log levels accepted by `observability.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &BootstrapConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(reason) = validate_base_name(&config.node.name) {
        errors.push(ValidationError::new("node.name", reason));
    }

    if let Err(reason) = validate_namespace(&config.node.namespace) {
        errors.push(ValidationError::new("node.namespace", reason));
    }

    if !is_unit_type(&config.unit.unit_type) {
        errors.push(ValidationError::new(
            "unit.type",
            format!("'{}' is not of the form package/Type", config.unit.unit_type),
        ));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_unit_type(unit_type: &str) -> bool {
    match unit_type.split_once('/') {
        Some((package, name)) => {
            validate_base_name(package).is_ok() && validate_base_name(name).is_ok()
        }
        None => false,
    }
}
