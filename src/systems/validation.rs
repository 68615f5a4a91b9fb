//! Course design-rule checks.
//!
//! Each predicate is independent and inclusive at both bounds. Calculations
//! never call these; they happily compute on out-of-range designs.

use std::ops::RangeInclusive;

use crate::components::{Area, Motor, Propeller};

pub const WING_AREA_RANGE: RangeInclusive<f64> = 750.0..=3500.0; // cm^2
pub const MIN_WING_SPAN: f64 = 50.0; // cm
pub const MIN_WING_CHORD: f64 = 15.0; // cm
pub const MOTOR_KV_RANGE: RangeInclusive<f64> = 500.0..=2500.0;
pub const PROPELLER_DIAMETER_RANGE: RangeInclusive<f64> = 4.0..=13.0; // in
pub const PROPELLER_PITCH_RANGE: RangeInclusive<f64> = 3.0..=7.5; // in
pub const COEFFICIENT_OF_DRAG_RANGE: RangeInclusive<f64> = 0.2..=0.5;
pub const BATTERY_CAPACITY_RANGE: RangeInclusive<f64> = 500.0..=5000.0; // mAh

pub fn is_valid_wing_area(area: Area) -> bool {
    WING_AREA_RANGE.contains(&area.in_square_centimetres())
}

pub fn is_valid_wing_span(span: f64) -> bool {
    span >= MIN_WING_SPAN
}

pub fn is_valid_wing_chord(chord: f64) -> bool {
    chord >= MIN_WING_CHORD
}

pub fn is_valid_motor_kv(motor: &Motor) -> bool {
    MOTOR_KV_RANGE.contains(&motor.kv)
}

pub fn is_valid_propeller_diameter(diameter: f64) -> bool {
    PROPELLER_DIAMETER_RANGE.contains(&diameter)
}

pub fn is_valid_propeller_pitch(pitch: f64) -> bool {
    PROPELLER_PITCH_RANGE.contains(&pitch)
}

/// A propeller must not be pitched more than it is wide.
pub fn is_valid_diameter_to_pitch(propeller: &Propeller) -> bool {
    propeller.diameter >= propeller.pitch
}

pub fn is_valid_coefficient_of_drag(coefficient_of_drag: f64) -> bool {
    COEFFICIENT_OF_DRAG_RANGE.contains(&coefficient_of_drag)
}

pub fn is_valid_battery_capacity(capacity: f64) -> bool {
    BATTERY_CAPACITY_RANGE.contains(&capacity)
}
