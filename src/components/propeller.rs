use serde::{Deserialize, Serialize};

/// Fixed-pitch propeller. Both dimensions are in inches, as printed on the hub.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Propeller {
    pub diameter: f64,
    pub pitch: f64,
}

impl Propeller {
    pub fn new(diameter: f64, pitch: f64) -> Self {
        Self { diameter, pitch }
    }
}
