pub mod aerodynamics;
pub mod envelope;
pub mod geometry;
pub mod propulsion;
pub mod validation;

pub use aerodynamics::{coefficient_of_lift, stability, wing_cube_loading};
pub use envelope::{drag, drag_at_unit_velocity, lift, minimum_velocity, payload_capacity, weight};
pub use geometry::{
    aspect_ratio, mass_of_battery, mass_of_components, mass_of_propeller, plane_mass, total_mass,
    wing_area,
};
pub use propulsion::{
    current, endurance, maximum_velocity, motor_efficiency_rating, rpm, thrust, thrust_term_one,
    thrust_term_two,
};
pub use validation::{
    is_valid_battery_capacity, is_valid_coefficient_of_drag, is_valid_diameter_to_pitch,
    is_valid_motor_kv, is_valid_propeller_diameter, is_valid_propeller_pitch, is_valid_wing_area,
    is_valid_wing_chord, is_valid_wing_span,
};
