//! Processing units shipped with the crate.
//!
//! Each unit registers under a `package/Type` key in
//! [`UnitRegistry::with_defaults`](crate::runtime::UnitRegistry::with_defaults).

pub mod bathy_mapper;
