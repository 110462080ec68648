//! Command-line interface for the bathymetry mapper host.

use std::path::PathBuf;

use clap::Parser;

use crate::names::strip_ros_args;

/// Host process for the bathymetric mapping unit.
///
/// Any `name:=value` argument is a middleware argument (remapping, `__name`,
/// `__ns`, private `_param`) and is consumed before these options are parsed.
#[derive(Parser, Debug)]
#[command(name = "bathy_mapper_server", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Override `observability.log_level`.
    #[arg(long, value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse the options out of a full process argv, ignoring middleware arguments.
    pub fn try_parse_argv(argv: &[String]) -> Result<Self, clap::Error> {
        Self::try_parse_from(strip_ros_args(argv))
    }
}
