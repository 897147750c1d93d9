//! Fixed conversion factors shared by the whole pipeline.
//!
//! Canonical records stay metric; every factor here is applied exactly once, when
//! the aggregation engine finalizes a statistic for output.

pub const METERS_TO_MILES: f64 = 0.000621371;
pub const METERS_TO_FEET: f64 = 3.28084;
pub const MPS_TO_MPH: f64 = 2.23694;

/// kg of CO₂ saved per mile cycled instead of driven.
pub const CO2_KG_PER_MILE: f64 = 0.284;

/// Converted max speeds at or above this are GPS glitches.
pub const SPEED_GLITCH_MPH: f64 = 70.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn meters_to_miles(meters: f64) -> f64 {
    meters * METERS_TO_MILES
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * METERS_TO_FEET
}

pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPS_TO_MPH
}

pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / SECONDS_PER_HOUR
}

/// Nearest integer, half away from zero. Callers pass non-negative values.
pub fn round_whole(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

/// One decimal place, half away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
