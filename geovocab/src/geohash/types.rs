//! Geohash type definitions

use std::fmt;

/// The 32-symbol geohash alphabet (`0-9`, `b-z` without `a`, `i`, `l`, `o`).
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Precision used for every phrase lookup (9 chars, roughly ±2.4 m).
pub const DEFAULT_PRECISION: usize = 9;

/// Longest geohash the codec will produce.
///
/// Beyond 12 symbols the bisection runs out of `f64` resolution.
pub const MAX_PRECISION: usize = 12;

pub(super) const BITS_PER_CHAR: u8 = 5;

/// The cell a geohash describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// The whole globe, the starting box for every decode.
    pub fn world() -> Self {
        Self {
            min_lat: MIN_LAT,
            max_lat: MAX_LAT,
            min_lon: MIN_LON,
            max_lon: MAX_LON,
        }
    }

    /// Unrounded midpoint as `(lat, lon)`.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Half the cell height and width, i.e. the worst-case error of `center()`.
    pub fn error_margin(&self) -> (f64, f64) {
        (
            (self.max_lat - self.min_lat) / 2.0,
            (self.max_lon - self.min_lon) / 2.0,
        )
    }

    /// Whether the point lies inside the cell (edges included).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

/// Errors that can occur while encoding or decoding geohashes.
#[derive(Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// Latitude is outside -90.0 to 90.0 or not a number
    InvalidLatitude(f64),
    /// Longitude is outside -180.0 to 180.0 or not a number
    InvalidLongitude(f64),
    /// Requested precision is zero or above [`MAX_PRECISION`]
    InvalidPrecision(usize),
    /// Character is not part of the base-32 alphabet
    InvalidCharacter { character: char, position: usize },
    /// Nothing to decode
    Empty,
}

impl fmt::Display for GeohashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeohashError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            GeohashError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
            GeohashError::InvalidPrecision(precision) => {
                write!(
                    f,
                    "Invalid geohash precision: {} (must be between 1 and {})",
                    precision, MAX_PRECISION
                )
            }
            GeohashError::InvalidCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Invalid geohash character '{}' at position {}",
                    character, position
                )
            }
            GeohashError::Empty => write!(f, "Empty geohash"),
        }
    }
}

impl std::error::Error for GeohashError {}
