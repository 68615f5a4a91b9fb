//! Derived specifications for small electric model aircraft.
//!
//! [`systems`] holds the stateless formulas (geometry, aerodynamics,
//! propulsion, flight envelope) and the course design-rule predicates,
//! [`components`] the value records they operate on, and [`report`] chains
//! them in dependency order for a whole [`Plane`](components::Plane).

pub mod components;
pub mod report;
pub mod systems;
pub mod utils;

pub use components::{
    Area, AreaUnit, Battery, BatteryCells, ConfigError, Mass, MassUnit, Motor, Plane, PlaneConfig,
    PlaneSource, PlaneType, Propeller,
};
pub use report::{compute_report, design_checks, DesignCheck, PlaneReport};
pub use utils::errors::SpecError;
