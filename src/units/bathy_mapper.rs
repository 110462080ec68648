//! Host shell for the bathymetric mapping unit.
//!
//! Resolves the unit's endpoints against the remap table and announces
//! readiness through the dispatch loop. The mapping computation itself runs
//! behind these endpoints and is not part of this crate.

use crate::error::UnitError;
use crate::runtime::{Nodelet, UnitContext};

/// Registry key of this unit.
pub const UNIT_TYPE: &str = "bathy_mapper/BathyMapperNodelet";

/// Grid cell size in metres when `_resolution:=` is not given.
pub const DEFAULT_RESOLUTION: f64 = 0.5;

/// Resolved endpoint names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Sonar/depth input.
    pub scan: String,
    /// Vehicle odometry input.
    pub odom: String,
    /// Published bathymetry map, private to the node.
    pub map: String,
}

impl Endpoints {
    pub fn resolve(ctx: &UnitContext) -> Self {
        Self {
            scan: ctx.resolve_name("scan"),
            odom: ctx.resolve_name("odom"),
            map: ctx.resolve_name("~map"),
        }
    }
}

#[derive(Debug, Default)]
pub struct BathyMapperNodelet {
    endpoints: Option<Endpoints>,
    resolution: Option<f64>,
}

impl BathyMapperNodelet {
    /// Endpoints, once initialized.
    pub fn endpoints(&self) -> Option<&Endpoints> {
        self.endpoints.as_ref()
    }

    /// Grid cell size in metres, once initialized.
    pub fn resolution(&self) -> Option<f64> {
        self.resolution
    }
}

/// Read `~resolution`; it must be a positive number of metres.
fn resolution(ctx: &UnitContext) -> Result<f64, UnitError> {
    let Some(raw) = ctx.param("resolution") else {
        return Ok(DEFAULT_RESOLUTION);
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(UnitError::new(format!(
            "~resolution must be a positive number of metres, got '{}'",
            raw
        ))),
    }
}

impl Nodelet for BathyMapperNodelet {
    fn on_init(&mut self, ctx: &UnitContext) -> Result<(), UnitError> {
        let resolution = resolution(ctx)?;
        let endpoints = Endpoints::resolve(ctx);
        tracing::info!(
            unit = ctx.name(),
            scan = %endpoints.scan,
            odom = %endpoints.odom,
            map = %endpoints.map,
            resolution,
            "Endpoints resolved"
        );
        if !ctx.args().is_empty() {
            tracing::debug!(args = ?ctx.args(), "Unit arguments");
        }

        let unit = ctx.name().to_string();
        let bond_id = ctx.bond_id();
        ctx.queue().post(move || {
            tracing::info!(unit = %unit, %bond_id, "Bathymetry mapper ready");
            Ok(())
        });

        self.endpoints = Some(endpoints);
        self.resolution = Some(resolution);
        Ok(())
    }

    fn on_shutdown(&mut self) {
        self.endpoints = None;
        self.resolution = None;
    }
}
