pub const GRAVITY: f64 = 9.81; // m/s^2
pub const AIR_DENSITY: f64 = 1.22; // kg/m^3

// Propeller static-thrust regression (imperial inputs, RPM and inches)
pub const THRUST_C1: f64 = 3.59e-8;
pub const THRUST_C2: f64 = 4.23e-4;

/// Airframe mass per unit wing area for the foam-board construction (g/cm^2).
pub const AIRFRAME_MASS_PER_AREA: f64 = 0.25;
/// Divisor turning pack energy (V·mAh) into pack mass (g).
pub const BATTERY_ENERGY_DENSITY: f64 = 130.0;

// Motor efficiency regression: 1.10 - a·D - b·kV - c·D·kV
pub const EFFICIENCY_INTERCEPT: f64 = 1.10;
pub const EFFICIENCY_DIAMETER: f64 = 3.0e-2;
pub const EFFICIENCY_KV: f64 = 1.1e-4;
pub const EFFICIENCY_DIAMETER_KV: f64 = 7.0e-6;

/// Lift coefficient gain per square root of aspect ratio.
pub const LIFT_ASPECT_RATIO_GAIN: f64 = 0.1;

pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;
pub const SQ_CM_PER_SQ_M: f64 = 10_000.0;
