//! Bathymetry Mapper Host Library
//!
//! Bootstraps a node, resolves its launch-time remappings and hosts the
//! bathymetric mapping unit inside a dispatch loop until shutdown.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod names;
pub mod observability;
pub mod runtime;
pub mod units;

pub use config::schema::BootstrapConfig;
pub use error::BootstrapError;
pub use lifecycle::{Bootstrap, Shutdown};
