//! Geohash codec
//!
//! Converts between geographic coordinates and base-32 geohash strings using
//! the standard interleaved bisection: longitude and latitude bits alternate
//! (longitude first) and every 5 bits become one symbol of [`ALPHABET`].
//!
//! Decoding is precision-aware. The midpoint of the decoded cell is rounded
//! to the number of decimal places that matches the accuracy of the input
//! length (see [`decimal_places`]), so callers never see false precision.

mod types;

pub use types::{
    BoundingBox, GeohashError, ALPHABET, DEFAULT_PRECISION, MAX_LAT, MAX_LON, MAX_PRECISION,
    MIN_LAT, MIN_LON,
};

use types::BITS_PER_CHAR;

/// Encodes geographic coordinates into a geohash.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-90.0 to 90.0)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `precision` - Number of symbols to produce (1 to [`MAX_PRECISION`])
///
/// # Returns
///
/// The lowercase geohash, or an error if an input is out of range.
pub fn encode(lat: f64, lon: f64, precision: usize) -> Result<String, GeohashError> {
    // Range checks also reject NaN
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(GeohashError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(GeohashError::InvalidLongitude(lon));
    }
    if precision == 0 || precision > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision(precision));
    }

    let mut cell = BoundingBox::world();
    let mut hash = String::with_capacity(precision);
    let mut lon_bit = true;
    let mut bits = 0u8;
    let mut symbol = 0usize;

    while hash.len() < precision {
        symbol <<= 1;
        if lon_bit {
            let mid = (cell.min_lon + cell.max_lon) / 2.0;
            if lon >= mid {
                symbol |= 1;
                cell.min_lon = mid;
            } else {
                cell.max_lon = mid;
            }
        } else {
            let mid = (cell.min_lat + cell.max_lat) / 2.0;
            if lat >= mid {
                symbol |= 1;
                cell.min_lat = mid;
            } else {
                cell.max_lat = mid;
            }
        }
        lon_bit = !lon_bit;

        bits += 1;
        if bits == BITS_PER_CHAR {
            hash.push(ALPHABET[symbol] as char);
            bits = 0;
            symbol = 0;
        }
    }

    Ok(hash)
}

/// Decodes a geohash into the bounding box of its cell.
///
/// Characters are matched case-insensitively.
pub fn decode_bbox(geohash: &str) -> Result<BoundingBox, GeohashError> {
    if geohash.is_empty() {
        return Err(GeohashError::Empty);
    }

    let mut cell = BoundingBox::world();
    let mut lon_bit = true;

    for (position, character) in geohash.chars().enumerate() {
        let value = symbol_value(character).ok_or(GeohashError::InvalidCharacter {
            character,
            position,
        })?;

        for shift in (0..BITS_PER_CHAR).rev() {
            let bit = (value >> shift) & 1 == 1;
            if lon_bit {
                let mid = (cell.min_lon + cell.max_lon) / 2.0;
                if bit {
                    cell.min_lon = mid;
                } else {
                    cell.max_lon = mid;
                }
            } else {
                let mid = (cell.min_lat + cell.max_lat) / 2.0;
                if bit {
                    cell.min_lat = mid;
                } else {
                    cell.max_lat = mid;
                }
            }
            lon_bit = !lon_bit;
        }
    }

    Ok(cell)
}

/// Decodes a geohash into `(lat, lon)`, rounded for its length.
///
/// Returns the midpoint of the cell rounded to [`decimal_places`] of the
/// geohash length. Decoding an already rounded value again yields the same
/// numbers.
pub fn decode(geohash: &str) -> Result<(f64, f64), GeohashError> {
    let (lat, lon) = decode_bbox(geohash)?.center();
    let places = decimal_places(geohash.chars().count());
    Ok((round_to(lat, places), round_to(lon, places)))
}

/// Decimal places that match the positional accuracy of a geohash length.
///
/// | length | accuracy | places |
/// |--------|----------|--------|
/// | 9      | ±2.4 m   | 6      |
/// | 8      | ±19 m    | 5      |
/// | 7      | ±153 m   | 5      |
/// | 6      | ±1.2 km  | 4      |
///
/// Any other length uses 6.
pub fn decimal_places(length: usize) -> u32 {
    match length {
        9 => 6,
        8 | 7 => 5,
        6 => 4,
        _ => 6,
    }
}

/// Returns the 5-bit value of a geohash symbol, ignoring case.
#[inline]
pub fn symbol_value(character: char) -> Option<u8> {
    let lower = character.to_ascii_lowercase();
    if !lower.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&symbol| symbol == lower as u8)
        .map(|index| index as u8)
}

/// Rounds half-to-even on the exact binary value, like decimal formatting does.
///
/// Going through the formatter instead of `(v * 10^n).round() / 10^n` keeps
/// the result the closest `f64` to the decimal string, which makes rounding
/// idempotent.
fn round_to(value: f64, places: u32) -> f64 {
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}
