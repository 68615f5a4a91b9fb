use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::components::{Area, Mass, Plane};
use crate::systems::{
    aerodynamics, envelope, geometry, propulsion,
    validation::{
        is_valid_battery_capacity, is_valid_coefficient_of_drag, is_valid_diameter_to_pitch,
        is_valid_motor_kv, is_valid_propeller_diameter, is_valid_propeller_pitch,
        is_valid_wing_area, is_valid_wing_chord, is_valid_wing_span,
    },
};
use crate::utils::errors::{ensure_finite, SpecError};

/// Outcome of one design-rule predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignCheck {
    pub name: &'static str,
    pub passed: bool,
}

/// Every derived specification of a plane, computed in dependency order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaneReport {
    // Plane
    pub wing_span: f64,
    pub wing_chord: f64,
    pub wing_area: Area,
    pub plane_mass: Mass,
    pub aspect_ratio: f64,
    pub coefficient_of_lift: f64,
    pub coefficient_of_drag: f64,
    pub minimum_velocity: f64,
    pub maximum_velocity: f64,
    pub lift: f64,
    pub drag: f64,
    pub wing_cube_loading: f64,
    pub stability: f64,
    pub payload_capacity: Mass,

    // Battery
    pub battery_cells: u8,
    pub battery_voltage: f64,
    pub battery_capacity: f64,
    pub battery_mass: Mass,
    pub endurance: f64,

    // Motor
    pub motor_kv: f64,
    pub motor_mass: Mass,
    pub motor_efficiency_rating: f64,
    pub rpm: f64,
    pub current: f64,

    // Propeller
    pub propeller_diameter: f64,
    pub propeller_pitch: f64,
    pub propeller_mass: Mass,
    pub static_thrust: f64,
    pub thrust: f64,

    pub components_mass: Mass,
    pub total_mass: Mass,
    pub weight: f64,

    pub design_checks: Vec<DesignCheck>,
}

impl PlaneReport {
    pub fn failed_checks(&self) -> impl Iterator<Item = &DesignCheck> {
        self.design_checks.iter().filter(|check| !check.passed)
    }

    pub fn passes_all_checks(&self) -> bool {
        self.failed_checks().next().is_none()
    }
}

/// Applies every design-rule predicate to `plane`.
pub fn design_checks(plane: &Plane) -> Vec<DesignCheck> {
    let area = geometry::wing_area(plane.wing_span, plane.wing_chord);
    vec![
        DesignCheck {
            name: "wing area",
            passed: is_valid_wing_area(area),
        },
        DesignCheck {
            name: "wing span",
            passed: is_valid_wing_span(plane.wing_span),
        },
        DesignCheck {
            name: "wing chord",
            passed: is_valid_wing_chord(plane.wing_chord),
        },
        DesignCheck {
            name: "motor kV",
            passed: is_valid_motor_kv(&plane.motor),
        },
        DesignCheck {
            name: "propeller diameter",
            passed: is_valid_propeller_diameter(plane.propeller.diameter),
        },
        DesignCheck {
            name: "propeller pitch",
            passed: is_valid_propeller_pitch(plane.propeller.pitch),
        },
        DesignCheck {
            name: "propeller diameter vs pitch",
            passed: is_valid_diameter_to_pitch(&plane.propeller),
        },
        DesignCheck {
            name: "coefficient of drag",
            passed: is_valid_coefficient_of_drag(plane.coefficient_of_drag),
        },
        DesignCheck {
            name: "battery capacity",
            passed: is_valid_battery_capacity(plane.battery.capacity),
        },
    ]
}

/// Runs the full calculation chain for `plane`.
///
/// The plane's stored aspect ratio, lift coefficient and airframe mass are
/// used as given. Design-rule failures are recorded in the report, they do not
/// stop the calculation.
///
/// # Errors
/// Returns [`SpecError::NoRealSolution`]/[`SpecError::DegenerateEquilibrium`]
/// when no top speed exists, and [`SpecError::NonFinite`] for the first
/// derived quantity that comes out NaN or infinite.
pub fn compute_report(plane: &Plane) -> Result<PlaneReport, SpecError> {
    let design_checks = design_checks(plane);
    for check in design_checks.iter().filter(|check| !check.passed) {
        warn!(check = check.name, "design check failed");
    }

    let wing_area = geometry::wing_area(plane.wing_span, plane.wing_chord);
    ensure_finite("wing area", wing_area.value)?;
    let plane_mass = plane.mass;
    ensure_finite("plane mass", plane_mass.value)?;
    let aspect_ratio = ensure_finite("aspect ratio", plane.aspect_ratio)?;
    let coefficient_of_lift = ensure_finite("coefficient of lift", plane.coefficient_of_lift)?;
    debug!(
        wing_area = wing_area.value,
        plane_mass = plane_mass.value,
        aspect_ratio,
        coefficient_of_lift,
        "geometry"
    );

    let battery_mass = geometry::mass_of_battery(&plane.battery);
    let propeller_mass = geometry::mass_of_propeller(&plane.propeller);
    let components_mass =
        geometry::mass_of_components(&plane.battery, &plane.motor, &plane.propeller);
    let total_mass = geometry::total_mass(plane_mass, components_mass);
    ensure_finite("total mass", total_mass.value)?;
    debug!(
        components_mass = components_mass.value,
        total_mass = total_mass.value,
        "mass"
    );

    let voltage = plane.battery.voltage();
    let efficiency = ensure_finite(
        "motor efficiency rating",
        propulsion::motor_efficiency_rating(&plane.propeller, &plane.motor),
    )?;
    let rpm = ensure_finite("RPM", propulsion::rpm(efficiency, plane.motor.kv, voltage))?;
    let weight = ensure_finite("weight", envelope::weight(total_mass))?;
    debug!(efficiency, rpm, weight, "propulsion");

    let minimum_velocity = ensure_finite(
        "minimum velocity",
        envelope::minimum_velocity(wing_area, coefficient_of_lift, weight),
    )?;
    let maximum_velocity = ensure_finite(
        "maximum velocity",
        propulsion::maximum_velocity(rpm, &plane.propeller, wing_area, plane.coefficient_of_drag)?,
    )?;
    debug!(minimum_velocity, maximum_velocity, "velocity envelope");

    let lift = ensure_finite(
        "lift",
        envelope::lift(maximum_velocity, wing_area, coefficient_of_lift),
    )?;
    let drag = ensure_finite(
        "drag",
        envelope::drag(wing_area, plane.coefficient_of_drag, maximum_velocity),
    )?;
    let static_thrust = ensure_finite(
        "static thrust",
        propulsion::thrust(rpm, &plane.propeller, 0.0),
    )?;
    let thrust = ensure_finite(
        "thrust",
        propulsion::thrust(rpm, &plane.propeller, maximum_velocity),
    )?;
    let current = ensure_finite(
        "current",
        propulsion::current(thrust, maximum_velocity, voltage),
    )?;
    let endurance = ensure_finite(
        "endurance",
        propulsion::endurance(plane.battery.capacity, current),
    )?;

    let wing_cube_loading = ensure_finite(
        "wing cube loading",
        aerodynamics::wing_cube_loading(total_mass, wing_area),
    )?;
    let stability = ensure_finite(
        "stability",
        aerodynamics::stability(aspect_ratio, wing_cube_loading),
    )?;
    let payload_capacity = envelope::payload_capacity(lift, total_mass);
    ensure_finite("payload capacity", payload_capacity.value)?;
    debug!(
        lift,
        drag,
        wing_cube_loading,
        stability,
        payload_capacity = payload_capacity.value,
        "flight envelope"
    );

    Ok(PlaneReport {
        wing_span: plane.wing_span,
        wing_chord: plane.wing_chord,
        wing_area,
        plane_mass,
        aspect_ratio,
        coefficient_of_lift,
        coefficient_of_drag: plane.coefficient_of_drag,
        minimum_velocity,
        maximum_velocity,
        lift,
        drag,
        wing_cube_loading,
        stability,
        payload_capacity,
        battery_cells: plane.battery.cells.count(),
        battery_voltage: voltage,
        battery_capacity: plane.battery.capacity,
        battery_mass,
        endurance,
        motor_kv: plane.motor.kv,
        motor_mass: plane.motor.mass,
        motor_efficiency_rating: efficiency,
        rpm,
        current,
        propeller_diameter: plane.propeller.diameter,
        propeller_pitch: plane.propeller.pitch,
        propeller_mass,
        static_thrust,
        thrust,
        components_mass,
        total_mass,
        weight,
        design_checks,
    })
}

impl fmt::Display for PlaneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plane")?;
        writeln!(f, "Wing Span: {}cm", self.wing_span)?;
        writeln!(f, "Wing Chord: {}cm", self.wing_chord)?;
        writeln!(f, "Wing Area: {}", self.wing_area)?;
        writeln!(f, "Mass: {}", self.plane_mass)?;
        writeln!(f, "Aspect Ratio: {}", self.aspect_ratio)?;
        writeln!(f, "Coefficient of Lift: {:.4}", self.coefficient_of_lift)?;
        writeln!(f, "Coefficient of Drag: {}", self.coefficient_of_drag)?;
        writeln!(f, "Minimum Velocity: {:.2}m/s", self.minimum_velocity)?;
        writeln!(f, "Maximum Velocity: {:.2}m/s", self.maximum_velocity)?;
        writeln!(f, "Lift: {:.2}N", self.lift)?;
        writeln!(f, "Drag: {:.2}N", self.drag)?;
        writeln!(f, "WCL: {:.4}", self.wing_cube_loading)?;
        writeln!(f, "Stability: {:.4}", self.stability)?;
        writeln!(f, "Payload Capacity: {:.3}kg", self.payload_capacity.value)?;
        writeln!(f)?;
        writeln!(f, "Battery")?;
        writeln!(f, "Cells: {}", self.battery_cells)?;
        writeln!(f, "Voltage: {}V", self.battery_voltage)?;
        writeln!(f, "Capacity: {}mAh", self.battery_capacity)?;
        writeln!(f, "Mass: {:.2}g", self.battery_mass.in_grams())?;
        writeln!(f, "Endurance: {:.2}", self.endurance)?;
        writeln!(f)?;
        writeln!(f, "Motor")?;
        writeln!(f, "Mass: {}g", self.motor_mass.in_grams())?;
        writeln!(f, "kV: {}Kv", self.motor_kv)?;
        writeln!(f, "Efficiency Rating: {:.4}", self.motor_efficiency_rating)?;
        writeln!(f, "RPM: {:.0}", self.rpm)?;
        writeln!(f, "Current: {:.2}A", self.current)?;
        writeln!(f)?;
        writeln!(f, "Propeller")?;
        writeln!(f, "Diameter: {} in.", self.propeller_diameter)?;
        writeln!(f, "Pitch: {} in.", self.propeller_pitch)?;
        writeln!(f, "Mass: {}g", self.propeller_mass.in_grams())?;
        writeln!(f, "Static Thrust: {:.2}N", self.static_thrust)?;
        writeln!(f)?;
        writeln!(f, "Total Mass: {:.2}g", self.total_mass.in_grams())?;
        write!(f, "Weight: {:.2}kg·m/s²", self.weight)
    }
}
