mod loader;
mod plane;

pub use loader::{ConfigError, RawPlaneConfig};
pub use plane::{PlaneConfig, PlaneSource, PlaneType};
