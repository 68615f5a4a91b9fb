use serde::{Deserialize, Serialize};

use crate::components::{Battery, Mass, Motor, Propeller};
use crate::systems::{aspect_ratio, coefficient_of_lift, plane_mass, wing_area};

/// A complete model aircraft design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Wing span (cm).
    pub wing_span: f64,
    /// Wing chord (cm).
    pub wing_chord: f64,
    pub coefficient_of_lift: f64,
    pub coefficient_of_drag: f64,
    pub aspect_ratio: f64,
    /// Airframe mass, excluding battery, motor and propeller.
    pub mass: Mass,
    pub propeller: Propeller,
    pub battery: Battery,
    pub motor: Motor,
}

impl Plane {
    /// Builds a plane from its free design parameters.
    ///
    /// # Arguments
    /// * `wing_span` - Wing span (cm).
    /// * `wing_chord` - Wing chord (cm).
    /// * `coefficient_of_drag` - Drag coefficient of the wing.
    /// * `propeller`, `battery`, `motor` - Installed components.
    ///
    /// # Returns
    /// A `Plane` whose aspect ratio, lift coefficient and airframe mass are
    /// derived from the wing geometry.
    pub fn from_design(
        wing_span: f64,
        wing_chord: f64,
        coefficient_of_drag: f64,
        propeller: Propeller,
        battery: Battery,
        motor: Motor,
    ) -> Self {
        let aspect_ratio = aspect_ratio(wing_span, wing_chord);
        Self {
            wing_span,
            wing_chord,
            coefficient_of_lift: coefficient_of_lift(coefficient_of_drag, aspect_ratio),
            coefficient_of_drag,
            aspect_ratio,
            mass: plane_mass(wing_area(wing_span, wing_chord)),
            propeller,
            battery,
            motor,
        }
    }
}
