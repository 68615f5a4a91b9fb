use crate::components::{Area, Motor, Propeller};
use crate::systems::envelope::drag_at_unit_velocity;
use crate::utils::constants::{
    AIR_DENSITY, EFFICIENCY_DIAMETER, EFFICIENCY_DIAMETER_KV, EFFICIENCY_INTERCEPT,
    EFFICIENCY_KV, THRUST_C1, THRUST_C2,
};
use crate::utils::errors::SpecError;
use crate::utils::math::positive_quadratic_root;

/// Regression estimate of motor/propeller efficiency.
///
/// `1.10 - 0.03·D - 0.00011·kV - 0.000007·D·kV`. The fit is only advisory:
/// outside the course's component range it can drop below 0 or exceed 1.
pub fn motor_efficiency_rating(propeller: &Propeller, motor: &Motor) -> f64 {
    EFFICIENCY_INTERCEPT
        - EFFICIENCY_DIAMETER * propeller.diameter
        - EFFICIENCY_KV * motor.kv
        - EFFICIENCY_DIAMETER_KV * propeller.diameter * motor.kv
}

/// Loaded shaft speed (RPM).
pub fn rpm(efficiency_rating: f64, kv: f64, voltage: f64) -> f64 {
    efficiency_rating * kv * voltage
}

/// Velocity-independent factor of the thrust model, `c1·ρ·RPM·D^3.5/√P`.
///
/// This is also the coefficient of `v` in the expanded thrust expression.
pub fn thrust_term_one(rpm: f64, propeller: &Propeller) -> f64 {
    THRUST_C1 * (AIR_DENSITY * rpm * propeller.diameter.powf(3.5) / propeller.pitch.sqrt())
}

/// Pitch-speed factor of the thrust model, `c2·RPM·P - v`.
pub fn thrust_term_two(rpm: f64, propeller: &Propeller, velocity: f64) -> f64 {
    THRUST_C2 * rpm * propeller.pitch - velocity
}

/// Propeller thrust (N) at a given forward velocity (m/s).
pub fn thrust(rpm: f64, propeller: &Propeller, velocity: f64) -> f64 {
    thrust_term_one(rpm, propeller) * thrust_term_two(rpm, propeller, velocity)
}

/// Level-flight top speed (m/s), where thrust equals drag.
///
/// Expanding the thrust model gives `T(v) = T₀ - k·v` with `k` from
/// [`thrust_term_one`] and `T₀` the static thrust. Setting it equal to
/// `d·v²` yields `d·v² + k·v - T₀ = 0`, of which the positive root is taken.
///
/// # Errors
/// [`SpecError::NoRealSolution`] if the quadratic has no real root (for
/// example a negative drag coefficient, or a negative pitch making the
/// discriminant NaN) and [`SpecError::DegenerateEquilibrium`] if the drag
/// term is zero.
pub fn maximum_velocity(
    rpm: f64,
    propeller: &Propeller,
    wing_area: Area,
    coefficient_of_drag: f64,
) -> Result<f64, SpecError> {
    let drag = drag_at_unit_velocity(wing_area, coefficient_of_drag);
    let thrust_term_one = thrust_term_one(rpm, propeller);
    let static_thrust = thrust_term_one * thrust_term_two(rpm, propeller, 0.0);

    positive_quadratic_root(drag, thrust_term_one, -static_thrust)
}

/// Current draw (A) to deliver `thrust · velocity` of power at `voltage`.
pub fn current(thrust: f64, velocity: f64, voltage: f64) -> f64 {
    (thrust * velocity) / voltage
}

/// Flight time as `capacity / current`.
///
/// No time-scaling factor is applied, so the result is in the capacity's unit
/// divided by the current's unit (mAh / A).
pub fn endurance(capacity: f64, current: f64) -> f64 {
    capacity / current
}
