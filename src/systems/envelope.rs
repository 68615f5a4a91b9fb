use crate::components::{Area, Mass};
use crate::utils::constants::{AIR_DENSITY, GRAVITY};

/// Weight force (N) of a mass at sea level.
pub fn weight(total_mass: Mass) -> f64 {
    total_mass.in_kilograms() * GRAVITY
}

/// Stall speed (m/s), the slowest speed at which lift balances `weight`.
///
/// # Arguments
/// * `wing_area` - Wing area, any unit.
/// * `coefficient_of_lift` - Lift coefficient of the wing.
/// * `weight` - Weight force (N).
pub fn minimum_velocity(wing_area: Area, coefficient_of_lift: f64, weight: f64) -> f64 {
    (weight / (0.5 * AIR_DENSITY * wing_area.in_square_metres() * coefficient_of_lift)).sqrt()
}

/// Drag force (N), `½·ρ·v²·S·cd`.
pub fn drag(wing_area: Area, coefficient_of_drag: f64, velocity: f64) -> f64 {
    0.5 * AIR_DENSITY * velocity.powi(2) * wing_area.in_square_metres() * coefficient_of_drag
}

/// Drag at 1 m/s, i.e. the coefficient multiplying `v²` in [`drag`].
pub fn drag_at_unit_velocity(wing_area: Area, coefficient_of_drag: f64) -> f64 {
    drag(wing_area, coefficient_of_drag, 1.0)
}

/// Lift force (N), `½·ρ·v²·S·cl`.
pub fn lift(velocity: f64, wing_area: Area, coefficient_of_lift: f64) -> f64 {
    0.5 * AIR_DENSITY * velocity.powi(2) * wing_area.in_square_metres() * coefficient_of_lift
}

/// Mass the wing could carry beyond the aircraft itself at the given lift.
///
/// Negative when the lift cannot support the aircraft; the value is reported
/// as-is rather than clamped.
pub fn payload_capacity(lift: f64, total_mass: Mass) -> Mass {
    Mass::kilograms(lift / GRAVITY - total_mass.in_kilograms())
}
