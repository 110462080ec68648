//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BootstrapConfig (validated, immutable)
//!     → node/unit defaults for the bootstrap
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so the process runs without a file
//! - Command-line `__name:=`/`__ns:=` override the node section
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::BootstrapConfig;
pub use schema::NodeConfig;
pub use schema::ObservabilityConfig;
pub use schema::UnitConfig;
