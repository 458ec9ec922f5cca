//! Interpretation of free-form geographic coordinates typed by a human.
//!
//! The latitude or longitude can be provided as:
//! - plain decimal degrees (`-45.5`);
//! - degrees and decimal minutes (`45 30`);
//! - degrees, minutes and decimal seconds (`40 26 46.3`),
//!
//! optionally followed by the hemisphere letter (`N`, `S` for latitudes, `E`, `W` for longitudes),
//! either glued to the last number (`45 30S`) or separated from it (`45 30 S`).
//! Any characters other than digits, letters, the dot and the minus sign
//! separate the components, so the degree, arcminute and arcsecond signs are also accepted.
//!
//! ```
//! use latlon_input::{parse_latitude, parse_longitude};
//!
//! assert_eq!(parse_latitude("45S"), Some(-45.0));
//! assert_eq!(parse_longitude("122°30′W"), Some(-122.5));
//!
//! // the sign should be defined either with the minus or with the letter
//! assert_eq!(parse_latitude("-45 S"), None);
//! // minutes in range [0..60] only
//! assert_eq!(parse_latitude("45 75"), None);
//! // latitude is limited to 90 degrees
//! assert_eq!(parse_latitude("95N"), None);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{dm_to_dd, dms_to_dd, OutOfRange, ParseAngleError, Sexagesimal};
pub use coord::{
    Latitude, Longitude, MemoryStore, ParseCoordinateError, ParsedForm, Point, Pole,
    PositionStore, RotationalDirection,
};

mod angle;
mod coord;
mod utils;

/// Interpret the text as a latitude in signed decimal degrees (negative to the south).
///
/// Nothing is returned if the text is malformed or the value is out of `-90..=90`.
/// Use [`Latitude::from_str`](std::str::FromStr::from_str) to know the exact reason.
///
/// ```
/// # use latlon_input::parse_latitude;
/// assert_eq!(parse_latitude("45N"), Some(45.0));
/// assert_eq!(parse_latitude("45 30 S"), Some(-45.5));
/// assert!((parse_latitude("40 26 46 N").unwrap() - 40.446_111).abs() < 1e-6);
/// assert_eq!(parse_latitude(""), None);
/// ```
pub fn parse_latitude(s: &str) -> Option<f64> {
    s.parse::<Latitude>().ok().map(f64::from)
}

/// Interpret the text as a longitude in signed decimal degrees (negative to the west).
///
/// Nothing is returned if the text is malformed or the value is out of `-180..=180`.
/// Use [`Longitude::from_str`](std::str::FromStr::from_str) to know the exact reason.
///
/// ```
/// # use latlon_input::parse_longitude;
/// assert_eq!(parse_longitude("122 30 W"), Some(-122.5));
/// assert_eq!(parse_longitude("-70.9395"), Some(-70.9395));
/// assert_eq!(parse_longitude("181E"), None);
/// ```
pub fn parse_longitude(s: &str) -> Option<f64> {
    s.parse::<Longitude>().ok().map(f64::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hemisphere_letters() {
        assert_eq!(parse_latitude("45N"), Some(45.0));
        assert_eq!(parse_latitude("45S"), Some(-45.0));
        assert_eq!(parse_longitude("45E"), Some(45.0));
        assert_eq!(parse_longitude("45W"), Some(-45.0));
    }

    #[test]
    fn contradictory_sign() {
        assert_eq!(parse_latitude("-45 S"), None);
        assert_eq!(parse_longitude("-45 W"), None);
    }

    #[test]
    fn axis_letters_are_not_interchangeable() {
        assert_eq!(parse_latitude("45 E"), None);
        assert_eq!(parse_longitude("45 N"), None);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(parse_latitude("95N"), None);
        assert_eq!(parse_latitude("95"), None);
        assert_eq!(parse_longitude("95"), Some(95.0));
        assert_eq!(parse_longitude("185 W"), None);
    }

    #[test]
    fn bad_token_count() {
        assert_eq!(parse_latitude(""), None);
        assert_eq!(parse_latitude("1 2 3 4 5"), None);
        assert_eq!(parse_longitude("1 2 3 W 5"), None);
    }

    #[test]
    fn deterministic() {
        for s in ["40 26 46 N", "-45 S", "122°30′W", "garbage"] {
            assert_eq!(parse_latitude(s), parse_latitude(s));
            assert_eq!(parse_longitude(s), parse_longitude(s));
        }
    }
}
