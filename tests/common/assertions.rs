use approx::assert_relative_eq;
use plane_specs::{Mass, PlaneReport};

/// Assert that every numeric quantity in a report is finite
#[track_caller]
pub fn assert_report_finite(report: &PlaneReport) {
    let quantities = [
        ("wing area", report.wing_area.value),
        ("plane mass", report.plane_mass.value),
        ("aspect ratio", report.aspect_ratio),
        ("coefficient of lift", report.coefficient_of_lift),
        ("minimum velocity", report.minimum_velocity),
        ("maximum velocity", report.maximum_velocity),
        ("lift", report.lift),
        ("drag", report.drag),
        ("wing cube loading", report.wing_cube_loading),
        ("stability", report.stability),
        ("payload capacity", report.payload_capacity.value),
        ("endurance", report.endurance),
        ("motor efficiency rating", report.motor_efficiency_rating),
        ("rpm", report.rpm),
        ("current", report.current),
        ("static thrust", report.static_thrust),
        ("thrust", report.thrust),
        ("total mass", report.total_mass.value),
        ("weight", report.weight),
    ];

    for (name, value) in quantities {
        assert!(value.is_finite(), "{} is not finite: {}", name, value);
    }
}

/// Assert that two masses are approximately equal after normalizing to grams
#[track_caller]
pub fn assert_mass_eq(actual: Mass, expected: Mass, epsilon: f64) {
    assert_relative_eq!(
        actual.in_grams(),
        expected.in_grams(),
        epsilon = epsilon,
        max_relative = epsilon
    );
}
