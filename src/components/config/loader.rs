use serde::Deserialize;
use thiserror::Error;

use crate::components::{Battery, Motor, Propeller};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid plane configuration: {0}")]
    ValidationError(String),
}

/// Flat on-disk layout of a plane design file.
#[derive(Debug, Deserialize)]
pub struct RawPlaneConfig {
    /// Design identification
    pub name: String,

    /// Wing geometry (cm)
    pub wing_span: f64,
    pub wing_chord: f64,

    pub coefficient_of_drag: f64,

    /// Installed components
    pub propeller: Propeller,
    pub battery: Battery,
    pub motor: Motor,
}

impl RawPlaneConfig {
    /// Rejects values no calculation can use at all. Course design bounds are
    /// not enforced here; those are reported by the validation predicates.
    pub fn check(&self) -> Result<(), ConfigError> {
        let fields = [
            ("wing_span", self.wing_span),
            ("wing_chord", self.wing_chord),
            ("coefficient_of_drag", self.coefficient_of_drag),
            ("propeller.diameter", self.propeller.diameter),
            ("propeller.pitch", self.propeller.pitch),
            ("battery.capacity", self.battery.capacity),
            ("motor.kv", self.motor.kv),
            ("motor.mass", self.motor.mass.value),
        ];

        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(ConfigError::ValidationError(format!(
                "{name} must be finite, got {value}"
            ))),
            None => Ok(()),
        }
    }
}
