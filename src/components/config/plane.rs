use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::components::config::{ConfigError, RawPlaneConfig};
use crate::components::{Battery, BatteryCells, Mass, Motor, Plane, Propeller};

/// A named plane design together with the free parameters it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaneConfig {
    /// Name of the design, defaults to the preset name.
    pub name: String,
    pub plane_type: PlaneType,
    /// Wing span (cm).
    pub wing_span: f64,
    /// Wing chord (cm).
    pub wing_chord: f64,
    pub coefficient_of_drag: f64,
    pub propeller: Propeller,
    pub battery: Battery,
    pub motor: Motor,
}

impl Default for PlaneConfig {
    /// The course trainer is the reference design.
    fn default() -> Self {
        Self::trainer()
    }
}

impl PlaneConfig {
    /// Creates a plane configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - A `PlaneSource` specifying if the design is a built-in
    ///              preset (`Programmed`) or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the configuration or an error if the file fails to load.
    pub fn new(source: PlaneSource) -> Result<Self, ConfigError> {
        match source {
            PlaneSource::Programmed(plane_type) => Ok(Self::from_programmed(plane_type)),
            PlaneSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(plane_type: PlaneType) -> Self {
        match plane_type {
            PlaneType::Trainer => Self {
                name: "Trainer".to_string(),
                plane_type: PlaneType::Trainer,
                wing_span: 75.0,
                wing_chord: 25.0,
                coefficient_of_drag: 0.3,
                propeller: Propeller::new(12.0, 6.0),
                battery: Battery::new(BatteryCells::Four, 5000.0),
                motor: Motor::new(2000.0, Mass::grams(40.0)),
            },
            PlaneType::Glider => Self {
                name: "Glider".to_string(),
                plane_type: PlaneType::Glider,
                wing_span: 140.0,
                wing_chord: 18.0,
                coefficient_of_drag: 0.2,
                propeller: Propeller::new(9.0, 5.0),
                battery: Battery::new(BatteryCells::Three, 1300.0),
                motor: Motor::new(1100.0, Mass::grams(55.0)),
            },
            PlaneType::Custom(name) => Self {
                name: name.clone(),
                plane_type: PlaneType::Custom(name),
                ..Self::from_programmed(PlaneType::Trainer)
            },
        }
    }

    /// Reads a design from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&file_contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let raw_config: RawPlaneConfig = serde_yaml::from_str(contents)?;
        Self::from_raw_config(raw_config)
    }

    fn from_raw_config(raw: RawPlaneConfig) -> Result<Self, ConfigError> {
        raw.check()?;
        Ok(Self {
            plane_type: PlaneType::Custom(raw.name.clone()),
            name: raw.name,
            wing_span: raw.wing_span,
            wing_chord: raw.wing_chord,
            coefficient_of_drag: raw.coefficient_of_drag,
            propeller: raw.propeller,
            battery: raw.battery,
            motor: raw.motor,
        })
    }

    /// Builds the `Plane`, deriving aspect ratio, lift coefficient and
    /// airframe mass from the wing geometry.
    pub fn to_plane(&self) -> Plane {
        Plane::from_design(
            self.wing_span,
            self.wing_chord,
            self.coefficient_of_drag,
            self.propeller,
            self.battery,
            self.motor,
        )
    }

    pub fn trainer() -> Self {
        Self::from_programmed(PlaneType::Trainer)
    }

    pub fn glider() -> Self {
        Self::from_programmed(PlaneType::Glider)
    }
}

/// Source for a plane configuration.
#[derive(Debug, Clone)]
pub enum PlaneSource {
    Programmed(PlaneType),
    File(PathBuf),
}

/// Built-in designs.
#[derive(Debug, Clone, Serialize, Hash, PartialEq, Eq)]
pub enum PlaneType {
    /// 75 x 25 cm course reference design on a 4S pack.
    Trainer,
    /// Long-span, low-drag sailplane on a 3S pack.
    Glider,
    Custom(String),
}
