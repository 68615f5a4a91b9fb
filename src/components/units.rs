use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::utils::constants::{GRAMS_PER_KILOGRAM, SQ_CM_PER_SQ_M};

/// Unit tag carried by a [`Mass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
}

impl MassUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Grams => "g",
            MassUnit::Kilograms => "kg",
        }
    }
}

/// A mass with an explicit unit tag.
///
/// Arithmetic never trusts the tag of its operands: every consumer normalizes
/// through [`Mass::in_grams`] or [`Mass::in_kilograms`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    pub value: f64,
    pub units: MassUnit,
}

impl Mass {
    pub fn new(value: f64, units: MassUnit) -> Self {
        Self { value, units }
    }

    pub fn grams(value: f64) -> Self {
        Self::new(value, MassUnit::Grams)
    }

    pub fn kilograms(value: f64) -> Self {
        Self::new(value, MassUnit::Kilograms)
    }

    /// Magnitude in grams regardless of the stored tag.
    pub fn in_grams(&self) -> f64 {
        match self.units {
            MassUnit::Grams => self.value,
            MassUnit::Kilograms => self.value * GRAMS_PER_KILOGRAM,
        }
    }

    /// Magnitude in kilograms regardless of the stored tag.
    pub fn in_kilograms(&self) -> f64 {
        match self.units {
            MassUnit::Grams => self.value / GRAMS_PER_KILOGRAM,
            MassUnit::Kilograms => self.value,
        }
    }

    pub fn to_grams(self) -> Self {
        Self::grams(self.in_grams())
    }

    pub fn to_kilograms(self) -> Self {
        Self::kilograms(self.in_kilograms())
    }
}

/// Sums in grams; the result is always tagged `g`.
impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass::grams(self.in_grams() + rhs.in_grams())
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.units.symbol())
    }
}

/// Unit tag carried by an [`Area`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    #[serde(rename = "cm^2")]
    SquareCentimetres,
    #[serde(rename = "m^2")]
    SquareMetres,
}

impl AreaUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::SquareCentimetres => "cm^2",
            AreaUnit::SquareMetres => "m^2",
        }
    }
}

/// An area with an explicit unit tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub value: f64,
    pub units: AreaUnit,
}

impl Area {
    pub fn new(value: f64, units: AreaUnit) -> Self {
        Self { value, units }
    }

    pub fn square_centimetres(value: f64) -> Self {
        Self::new(value, AreaUnit::SquareCentimetres)
    }

    pub fn square_metres(value: f64) -> Self {
        Self::new(value, AreaUnit::SquareMetres)
    }

    pub fn in_square_centimetres(&self) -> f64 {
        match self.units {
            AreaUnit::SquareCentimetres => self.value,
            AreaUnit::SquareMetres => self.value * SQ_CM_PER_SQ_M,
        }
    }

    pub fn in_square_metres(&self) -> f64 {
        match self.units {
            AreaUnit::SquareCentimetres => self.value / SQ_CM_PER_SQ_M,
            AreaUnit::SquareMetres => self.value,
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.units.symbol())
    }
}
