use crate::components::{Area, Battery, Mass, Motor, Propeller};
use crate::utils::constants::{AIRFRAME_MASS_PER_AREA, BATTERY_ENERGY_DENSITY};

/// Planform area of a rectangular wing.
///
/// # Arguments
/// * `span` - Wing span (cm).
/// * `chord` - Wing chord (cm).
///
/// # Returns
/// The wing area tagged `cm^2`.
pub fn wing_area(span: f64, chord: f64) -> Area {
    Area::square_centimetres(span * chord)
}

/// Airframe mass from wing area, in grams.
pub fn plane_mass(area: Area) -> Mass {
    Mass::grams(AIRFRAME_MASS_PER_AREA * area.in_square_centimetres())
}

/// `span² / area`, which for a rectangular wing reduces to `span / chord`.
pub fn aspect_ratio(span: f64, chord: f64) -> f64 {
    span.powi(2) / wing_area(span, chord).value
}

/// Pack mass from stored energy, `V · mAh / 130`, in grams.
pub fn mass_of_battery(battery: &Battery) -> Mass {
    Mass::grams(battery.voltage() * battery.capacity / BATTERY_ENERGY_DENSITY)
}

/// Propeller mass in grams, taken as numerically equal to its diameter in
/// inches. This is a deliberate course simplification, not a density model.
pub fn mass_of_propeller(propeller: &Propeller) -> Mass {
    Mass::grams(propeller.diameter)
}

/// Battery + motor + propeller, in grams.
pub fn mass_of_components(battery: &Battery, motor: &Motor, propeller: &Propeller) -> Mass {
    mass_of_battery(battery) + motor.mass + mass_of_propeller(propeller)
}

/// Airframe plus installed components, in grams.
pub fn total_mass(plane_mass: Mass, components_mass: Mass) -> Mass {
    plane_mass + components_mass
}
