use serde::{Deserialize, Serialize};

use crate::components::ConfigError;

/// Lithium-polymer pack configuration. The nominal voltage follows from the
/// cell count and cannot be set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BatteryCells {
    /// 2S, 7.4 V
    Two,
    /// 3S, 11.1 V
    Three,
    /// 4S, 14.8 V
    Four,
}

impl BatteryCells {
    pub fn count(&self) -> u8 {
        match self {
            BatteryCells::Two => 2,
            BatteryCells::Three => 3,
            BatteryCells::Four => 4,
        }
    }

    /// Nominal pack voltage (V).
    pub fn voltage(&self) -> f64 {
        match self {
            BatteryCells::Two => 7.4,
            BatteryCells::Three => 11.1,
            BatteryCells::Four => 14.8,
        }
    }
}

impl TryFrom<u8> for BatteryCells {
    type Error = ConfigError;

    fn try_from(cells: u8) -> Result<Self, Self::Error> {
        match cells {
            2 => Ok(BatteryCells::Two),
            3 => Ok(BatteryCells::Three),
            4 => Ok(BatteryCells::Four),
            other => Err(ConfigError::ValidationError(format!(
                "unsupported battery cell count {other}, expected 2, 3 or 4"
            ))),
        }
    }
}

impl From<BatteryCells> for u8 {
    fn from(cells: BatteryCells) -> u8 {
        cells.count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub cells: BatteryCells,
    /// Pack capacity (mAh).
    pub capacity: f64,
}

impl Battery {
    pub fn new(cells: BatteryCells, capacity: f64) -> Self {
        Self { cells, capacity }
    }

    pub fn voltage(&self) -> f64 {
        self.cells.voltage()
    }
}
