//! Structural validators for request input.
//!
//! All checks are pure predicates. They return `false` rather than an error,
//! leaving it to the caller to decide which response a failure maps to.

use crate::geohash::{symbol_value, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Geohash length accepted for premium registration.
pub const PREMIUM_GEOHASH_LENGTH: usize = 9;

/// True if `value` parses as a number within -90.0 to 90.0.
pub fn valid_latitude(value: &str) -> bool {
    parse_in_range(value, MIN_LAT, MAX_LAT).is_some()
}

/// True if `value` parses as a number within -180.0 to 180.0.
pub fn valid_longitude(value: &str) -> bool {
    parse_in_range(value, MIN_LON, MAX_LON).is_some()
}

/// True if `value` is non-empty and every character is a geohash symbol.
///
/// Case is ignored.
pub fn valid_geohash_alphabet(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| symbol_value(c).is_some())
}

/// True if `value` is exactly `expected` characters long.
pub fn valid_geohash_length(value: &str, expected: usize) -> bool {
    value.chars().count() == expected
}

/// Parses a coordinate component, accepting surrounding whitespace.
///
/// NaN never satisfies the range check, so it is rejected along with
/// infinities.
pub fn parse_in_range(value: &str, min: f64, max: f64) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    (min..=max).contains(&parsed).then_some(parsed)
}
