use serde::{Deserialize, Serialize};

use crate::components::Mass;

/// Brushless outrunner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motor {
    /// Speed constant (RPM per volt).
    pub kv: f64,
    pub mass: Mass,
}

impl Motor {
    pub fn new(kv: f64, mass: Mass) -> Self {
        Self { kv, mass }
    }
}
