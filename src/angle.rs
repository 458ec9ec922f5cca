//! Sexagesimal (degree, minute, second) components of an angle
//! and their conversion into the signed decimal degrees.
//!
//! The degrees part may carry its own sign, while the minutes and seconds
//! are always unsigned and limited to `[0..60]` (both ends inclusive,
//! as users tend to type `60` instead of carrying it over).

use log::trace;

mod consts;
mod errors;

pub(crate) use consts::{HALF_TURN_DEG, QUARTER_TURN_DEG};
pub use errors::{OutOfRange, ParseAngleError};

use consts::{MINUTES_IN_DEGREE, SECONDS_IN_MINUTE};

/// Degrees, arc minutes and arc seconds exactly as they were provided
/// (before any sign resolution).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Sexagesimal {
    degrees: f64,
    minutes: f64,
    seconds: f64,
}

impl Sexagesimal {
    /// Only the degrees part, no minutes or seconds
    pub const fn with_degrees(degrees: f64) -> Self {
        Self {
            degrees,
            minutes: 0.0,
            seconds: 0.0,
        }
    }

    /// Degrees with decimal minutes.
    ///
    /// # Errors
    /// The minutes are not in range `[0..60]`.
    pub fn with_dm(degrees: f64, minutes: f64) -> Result<Self, OutOfRange> {
        Self::with_dms(degrees, minutes, 0.0)
    }

    /// Degrees, minutes and decimal seconds.
    ///
    /// # Errors
    /// The minutes or seconds are not in range `[0..60]`.
    pub fn with_dms(degrees: f64, minutes: f64, seconds: f64) -> Result<Self, OutOfRange> {
        let valid_minutes = 0.0..=f64::from(MINUTES_IN_DEGREE);
        if !valid_minutes.contains(&minutes) {
            return Err(OutOfRange::ArcMinutes);
        }

        let valid_seconds = 0.0..=f64::from(SECONDS_IN_MINUTE);
        if !valid_seconds.contains(&seconds) {
            return Err(OutOfRange::ArcSeconds);
        }

        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    /// Parse the textual components. Missing minutes or seconds are zeros.
    ///
    /// # Errors
    /// - any of the components is not a number;
    /// - the minutes or seconds are not in range `[0..60]`.
    pub fn parse(
        degrees: &str,
        minutes: Option<&str>,
        seconds: Option<&str>,
    ) -> Result<Self, ParseAngleError> {
        let degrees = degrees.parse::<f64>()?;
        let minutes = minutes.map_or(Ok(0.0), str::parse::<f64>)?;
        let seconds = seconds.map_or(Ok(0.0), str::parse::<f64>)?;
        Ok(Self::with_dms(degrees, minutes, seconds)?)
    }

    /// Is the minus sign put in front of the degrees?
    pub fn is_negative(self) -> bool {
        self.degrees < 0.0
    }

    /// The unsigned sum of all the parts in degrees
    pub fn magnitude(self) -> f64 {
        let min_in_deg = f64::from(MINUTES_IN_DEGREE);
        let sec_in_deg = min_in_deg * f64::from(SECONDS_IN_MINUTE);
        self.degrees.abs() + self.minutes / min_in_deg + self.seconds / sec_in_deg
    }

    /// Combine the parts into a single signed value.
    ///
    /// The sign should be defined by a single source: either the degrees part
    /// or the hemisphere letter (`S` or `W`) but not both.
    ///
    /// # Errors
    /// Both the degrees and the hemisphere are negative.
    pub fn to_decimal(self, negative_hemisphere: bool) -> Result<f64, ParseAngleError> {
        let negative_degrees = self.is_negative();
        if negative_degrees && negative_hemisphere {
            return Err(ParseAngleError::SignConflict);
        }

        let magnitude = self.magnitude();
        let dd = if negative_degrees || negative_hemisphere {
            -magnitude
        } else {
            magnitude
        };

        trace!("{:?} -> {}", self, dd);
        Ok(dd)
    }
}

/// Convert degrees and decimal minutes into the decimal degrees.
///
/// ```
/// # use latlon_input::dm_to_dd;
/// assert_eq!(dm_to_dd("122", "30", true).unwrap(), -122.5);
/// assert_eq!(dm_to_dd("-12", "15", false).unwrap(), -12.25);
/// assert!(dm_to_dd("-12", "15", true).is_err());
/// ```
///
/// # Errors
/// See [`Sexagesimal::parse`] and [`Sexagesimal::to_decimal`].
pub fn dm_to_dd(
    degrees: &str,
    minutes: &str,
    negative_hemisphere: bool,
) -> Result<f64, ParseAngleError> {
    Sexagesimal::parse(degrees, Some(minutes), None)?.to_decimal(negative_hemisphere)
}

/// Convert degrees, minutes and decimal seconds into the decimal degrees.
///
/// # Errors
/// See [`Sexagesimal::parse`] and [`Sexagesimal::to_decimal`].
pub fn dms_to_dd(
    degrees: &str,
    minutes: &str,
    seconds: &str,
    negative_hemisphere: bool,
) -> Result<f64, ParseAngleError> {
    Sexagesimal::parse(degrees, Some(minutes), Some(seconds))?.to_decimal(negative_hemisphere)
}
