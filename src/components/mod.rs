pub mod battery;
pub mod config;
pub mod motor;
pub mod plane;
pub mod propeller;
pub mod units;

pub use battery::{Battery, BatteryCells};
pub use config::{ConfigError, PlaneConfig, PlaneSource, PlaneType, RawPlaneConfig};
pub use motor::Motor;
pub use plane::Plane;
pub use propeller::Propeller;
pub use units::{Area, AreaUnit, Mass, MassUnit};
