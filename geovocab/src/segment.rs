//! Geohash partitioning into fixed-width segments.
//!
//! A 9-character geohash splits into three 3-character segments. Each
//! segment is looked up independently, and segment order decides word order
//! in the phrase (and the other way round when rebuilding a geohash).

/// Width of one segment in the default configuration.
pub const SEGMENT_LENGTH: usize = 3;

/// Number of segments in a full-precision geohash.
pub const SEGMENT_COUNT: usize = 3;

/// Splits `geohash` into contiguous parts of `part_len` characters.
///
/// Parts keep their left-to-right order. The last part is shorter when the
/// length is not a multiple of `part_len`. A `part_len` of zero yields no
/// parts.
///
/// # Example
///
/// ```
/// use geovocab::segment::split;
///
/// assert_eq!(split("9q8yyk8yt", 3), vec!["9q8", "yyk", "8yt"]);
/// assert_eq!(split("9q8yyk8y", 3), vec!["9q8", "yyk", "8y"]);
/// ```
pub fn split(geohash: &str, part_len: usize) -> Vec<&str> {
    if part_len == 0 {
        return Vec::new();
    }

    let mut parts = Vec::with_capacity(geohash.len().div_ceil(part_len));
    let mut start = 0;
    let mut taken = 0;

    for (index, _) in geohash.char_indices() {
        if taken == part_len {
            parts.push(&geohash[start..index]);
            start = index;
            taken = 0;
        }
        taken += 1;
    }
    if taken > 0 {
        parts.push(&geohash[start..]);
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geohash::{encode, DEFAULT_PRECISION};
    use proptest::prelude::*;

    #[test]
    fn test_split_nine_into_three() {
        assert_eq!(split("9q8yyk8yt", SEGMENT_LENGTH), vec!["9q8", "yyk", "8yt"]);
    }

    #[test]
    fn test_split_keeps_short_tail() {
        assert_eq!(split("abcdefg", 3), vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_split_empty_and_zero_width() {
        assert!(split("", 3).is_empty());
        assert!(split("9q8yyk8yt", 0).is_empty());
    }

    #[test]
    fn test_split_wider_than_input() {
        assert_eq!(split("9q", 3), vec!["9q"]);
    }

    #[test]
    fn test_split_respects_char_boundaries() {
        assert_eq!(split("aéb", 2), vec!["aé", "b"]);
    }

    proptest! {
        /// Property: a full-precision geohash always yields 3 segments of 3 chars
        /// that concatenate back to the original.
        #[test]
        fn prop_full_precision_partition(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let hash = encode(lat, lon, DEFAULT_PRECISION).unwrap();
            let parts = split(&hash, SEGMENT_LENGTH);

            prop_assert_eq!(parts.len(), SEGMENT_COUNT);
            prop_assert!(parts.iter().all(|p| p.len() == SEGMENT_LENGTH));
            prop_assert_eq!(parts.concat(), hash);
        }
    }
}
