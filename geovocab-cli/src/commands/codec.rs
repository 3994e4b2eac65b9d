//! Geohash codec commands.
//!
//! These run without a config file, dictionary or log file.

use geovocab::geohash;
use serde_json::json;

use crate::commands::common::print_json;
use crate::error::CliError;

/// Print the geohash for a coordinate.
pub fn run_encode(lat: f64, lon: f64, precision: usize) -> Result<(), CliError> {
    let hash = geohash::encode(lat, lon, precision)?;
    print_json(&json!({
        "geoHash": hash,
        "precision": precision,
    }))
}

/// Print the rounded center and error margin of a geohash cell.
pub fn run_decode(hash: &str) -> Result<(), CliError> {
    let hash = hash.trim();
    let (latitude, longitude) = geohash::decode(hash)?;
    let (lat_error, lon_error) = geohash::decode_bbox(hash)?.error_margin();

    print_json(&json!({
        "geoHash": hash.to_ascii_lowercase(),
        "latitude": latitude,
        "longitude": longitude,
        "error": {
            "latitude": lat_error,
            "longitude": lon_error,
        },
    }))
}
