//! Middleware argument parsing.
//!
//! # Responsibilities
//! - Split `key:=value` arguments out of the process argv
//! - Classify them as remappings, special arguments or private parameters
//! - Leave everything else for the CLI parser
//!
//! # Argument Kinds
//! ```text
//! scan:=/sonar/raw     → remapping
//! __name:=mapper       → special (node name override)
//! __ns:=/auv           → special (namespace override)
//! _rate:=10            → private parameter `~rate`
//! --config foo.toml    → residual
//! ```

use std::collections::HashMap;

use crate::error::RegistrationError;
use crate::names::remap::RemapTable;
use crate::names::resolve::{validate_base_name, validate_graph_name, validate_namespace};

/// Separator between the two halves of a middleware argument.
pub const REMAP_SEPARATOR: &str = ":=";

/// Special argument keys understood by the runtime.
pub const SPECIAL_KEYS: &[&str] = &["__name", "__ns", "__log", "__ip", "__hostname", "__master"];

/// Returns true if `arg` is a middleware argument rather than a CLI argument.
pub fn is_ros_arg(arg: &str) -> bool {
    arg.contains(REMAP_SEPARATOR)
}

/// Remove every middleware argument from `argv`.
pub fn strip_ros_args(argv: &[String]) -> Vec<String> {
    argv.iter().filter(|a| !is_ros_arg(a)).cloned().collect()
}

/// Private parameters of a node, keyed as `~name`.
pub type PrivateParams = HashMap<String, String>;

/// Parsed middleware arguments of one process.
#[derive(Debug, Clone, Default)]
pub struct NodeArgs {
    remaps: RemapTable,
    specials: HashMap<String, String>,
    params: PrivateParams,
    residual: Vec<String>,
}

impl NodeArgs {
    /// Parse `argv`. Any malformed middleware argument fails the whole parse.
    pub fn parse(argv: &[String]) -> Result<Self, RegistrationError> {
        let mut remaps = Vec::new();
        let mut specials = HashMap::new();
        let mut params = PrivateParams::new();
        let mut residual = Vec::new();

        for arg in argv {
            let Some((key, value)) = arg.split_once(REMAP_SEPARATOR) else {
                residual.push(arg.clone());
                continue;
            };
            if key.is_empty() || value.is_empty() {
                return Err(RegistrationError::MalformedArgument(arg.clone()));
            }

            if key.starts_with("__") {
                if !SPECIAL_KEYS.contains(&key) {
                    return Err(RegistrationError::MalformedArgument(arg.clone()));
                }
                match key {
                    "__name" => check(value, validate_base_name(value))?,
                    "__ns" => check(value, validate_namespace(value))?,
                    _ => {}
                }
                tracing::debug!(key, value, "Special argument");
                specials.insert(key.to_string(), value.to_string());
            } else if let Some(param) = key.strip_prefix('_') {
                check(param, validate_graph_name(param))?;
                tracing::debug!(param, value, "Private parameter");
                params.insert(format!("~{}", param), value.to_string());
            } else {
                check(key, validate_graph_name(key))?;
                check(value, validate_graph_name(value))?;
                tracing::debug!(from = key, to = value, "Remapping");
                remaps.push((key.to_string(), value.to_string()));
            }
        }

        Ok(Self {
            remaps: remaps.into_iter().collect(),
            specials,
            params,
            residual,
        })
    }

    pub fn remaps(&self) -> &RemapTable {
        &self.remaps
    }

    /// Node name from `__name:=`, if given.
    pub fn name_override(&self) -> Option<&str> {
        self.special("__name")
    }

    /// Namespace from `__ns:=`, if given.
    pub fn namespace_override(&self) -> Option<&str> {
        self.special("__ns")
    }

    pub fn special(&self, key: &str) -> Option<&str> {
        self.specials.get(key).map(String::as_str)
    }

    /// Private parameters keyed as `~name`.
    pub fn params(&self) -> &PrivateParams {
        &self.params
    }

    /// Arguments that are not middleware arguments, in original order.
    pub fn residual(&self) -> &[String] {
        &self.residual
    }
}

fn check(name: &str, result: Result<(), &'static str>) -> Result<(), RegistrationError> {
    result.map_err(|reason| RegistrationError::InvalidName {
        name: name.to_string(),
        reason,
    })
}
