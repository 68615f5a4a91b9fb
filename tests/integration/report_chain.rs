use approx::assert_relative_eq;
use plane_specs::{
    compute_report,
    systems::{drag, lift, mass_of_battery, maximum_velocity, thrust, wing_area},
    Area, BatteryCells, Mass, MassUnit, SpecError,
};
use pretty_assertions::assert_eq;

use crate::common::{assert_mass_eq, assert_report_finite, trainer_plane, trainer_plane_kg_motor};

#[test]
fn test_trainer_reference_values() {
    let report = compute_report(&trainer_plane()).unwrap();
    assert_report_finite(&report);

    assert_relative_eq!(report.wing_area.value, 1875.0);
    assert_relative_eq!(report.aspect_ratio, 3.0);
    assert_relative_eq!(report.plane_mass.value, 468.75);
    assert_relative_eq!(report.battery_mass.value, 569.23, epsilon = 0.01);
    assert_relative_eq!(report.motor_efficiency_rating, 0.352, epsilon = 1e-12);
    assert_relative_eq!(report.rpm, 0.352 * 2000.0 * 14.8, epsilon = 1e-9);

    assert_eq!(report.battery_cells, 4);
    assert_eq!(report.battery_voltage, 14.8);
    assert_eq!(report.total_mass.units, MassUnit::Grams);
    assert_relative_eq!(report.total_mass.value, 1089.98, epsilon = 0.01);
    assert_relative_eq!(report.weight, report.total_mass.in_kilograms() * 9.81);
}

#[test]
fn test_components_mass_is_sum_of_parts() {
    let plane = trainer_plane();
    let report = compute_report(&plane).unwrap();

    let expected = mass_of_battery(&plane.battery) + plane.motor.mass + report.propeller_mass;
    assert_mass_eq(report.components_mass, expected, 1e-12);
    assert_mass_eq(
        report.total_mass,
        report.plane_mass + report.components_mass,
        1e-12,
    );
}

#[test]
fn test_flight_envelope_consistency() {
    let plane = trainer_plane();
    let report = compute_report(&plane).unwrap();
    let area = wing_area(plane.wing_span, plane.wing_chord);

    assert!(report.minimum_velocity > 0.0);
    assert!(report.maximum_velocity > report.minimum_velocity);

    // Lift at stall speed carries the weight
    assert_relative_eq!(
        lift(report.minimum_velocity, area, report.coefficient_of_lift),
        report.weight,
        epsilon = 1e-9
    );

    // Thrust balances drag at top speed
    assert_relative_eq!(report.thrust, report.drag, epsilon = 1e-9);
    assert_relative_eq!(
        report.drag,
        drag(area, plane.coefficient_of_drag, report.maximum_velocity),
        epsilon = 1e-12
    );
    assert!(report.static_thrust > report.thrust);

    assert_relative_eq!(
        report.payload_capacity.value,
        report.lift / 9.81 - report.total_mass.in_kilograms(),
        epsilon = 1e-12
    );
    assert_eq!(report.payload_capacity.units, MassUnit::Kilograms);
    assert_relative_eq!(
        report.stability,
        report.aspect_ratio / report.wing_cube_loading,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        report.current,
        report.thrust * report.maximum_velocity / 14.8,
        epsilon = 1e-9
    );
    assert_relative_eq!(report.endurance, 5000.0 / report.current, epsilon = 1e-9);
}

#[test]
fn test_motor_mass_units_do_not_change_results() {
    let grams = compute_report(&trainer_plane()).unwrap();
    let kilograms = compute_report(&trainer_plane_kg_motor()).unwrap();

    assert_mass_eq(kilograms.total_mass, grams.total_mass, 1e-12);
    assert_relative_eq!(kilograms.weight, grams.weight, epsilon = 1e-12);
    assert_relative_eq!(
        kilograms.minimum_velocity,
        grams.minimum_velocity,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        kilograms.wing_cube_loading,
        grams.wing_cube_loading,
        epsilon = 1e-12
    );
    assert_mass_eq(kilograms.payload_capacity, grams.payload_capacity, 1e-12);
    assert_eq!(kilograms.design_checks, grams.design_checks);
}

#[test]
fn test_negative_drag_has_no_top_speed() {
    let mut plane = trainer_plane();
    plane.coefficient_of_drag = -0.3;

    let result = compute_report(&plane);
    assert!(matches!(result, Err(SpecError::NoRealSolution { .. })));

    // The same failure is visible at the function level, never as NaN
    let area = Area::square_centimetres(1875.0);
    let direct = maximum_velocity(10419.2, &plane.propeller, area, -0.3);
    assert!(direct.is_err());
}

#[test]
fn test_zero_chord_is_reported_not_rendered() {
    let mut plane = trainer_plane();
    plane.wing_chord = 0.0;
    plane.aspect_ratio = f64::INFINITY;

    let result = compute_report(&plane);
    assert!(matches!(
        result,
        Err(SpecError::NonFinite {
            quantity: "aspect ratio",
            ..
        })
    ));
}

#[test]
fn test_out_of_range_design_still_computes() {
    let mut plane = trainer_plane();
    plane.motor.kv = 3000.0;
    plane.battery.cells = BatteryCells::Three;

    let report = compute_report(&plane).unwrap();
    assert_report_finite(&report);
    assert_eq!(report.battery_voltage, 11.1);

    let failed: Vec<_> = report.failed_checks().map(|check| check.name).collect();
    assert_eq!(failed, vec!["motor kV"]);
}

#[test]
fn test_thrust_at_zero_velocity_matches_static() {
    let plane = trainer_plane();
    let report = compute_report(&plane).unwrap();
    assert_relative_eq!(
        report.static_thrust,
        thrust(report.rpm, &plane.propeller, 0.0),
        epsilon = 1e-12
    );
    assert_mass_eq(report.motor_mass, Mass::grams(40.0), 1e-12);
}
