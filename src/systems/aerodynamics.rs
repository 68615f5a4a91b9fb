use crate::components::{Area, Mass};
use crate::utils::constants::LIFT_ASPECT_RATIO_GAIN;

/// Empirical lift coefficient, `cd + 0.1·√AR`.
///
/// Only meaningful over the aspect ratios the course designs use; no bounds
/// are enforced on the derived value.
pub fn coefficient_of_lift(coefficient_of_drag: f64, aspect_ratio: f64) -> f64 {
    coefficient_of_drag + LIFT_ASPECT_RATIO_GAIN * aspect_ratio.sqrt()
}

/// Wing-cube loading, `mass_kg / area_m2^1.5`.
///
/// Lower values indicate a more aerobatic airframe.
pub fn wing_cube_loading(total_mass: Mass, wing_area: Area) -> f64 {
    total_mass.in_kilograms() / wing_area.in_square_metres().powf(1.5)
}

pub fn stability(aspect_ratio: f64, wing_cube_loading: f64) -> f64 {
    aspect_ratio / wing_cube_loading
}
