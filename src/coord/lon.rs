use std::{convert::TryFrom, fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{OutOfRange, HALF_TURN_DEG},
    bool_enum,
};

use super::{ParseCoordinateError, ParsedCoordinate, ParsedForm};

bool_enum!(RotationalDirection: East and West; parse from 'E':'W' with ParseDirectionError);

/// The angle measured on the equatorial plane between the meridian of the point
/// and the prime meridian (Greenwich, UK), in signed decimal degrees
/// (`-180..=180`, negative to the west).
/// [Read more](https://en.wikipedia.org/wiki/Longitude).
#[derive(Debug, PartialOrd, PartialEq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Longitude(pub(super) f64);

impl Longitude {
    /// The chosen by convention [0-meridian](https://en.wikipedia.org/wiki/Prime_meridian)
    pub const fn prime() -> Self {
        Self(0.0)
    }

    /// Signed decimal degrees
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// Angle between the longitude and the prime meridian (absolute value of the longitude).
    pub fn angle(self) -> f64 {
        self.0.abs()
    }

    /// The direction of the rotation from the prime meridian.
    /// Both the prime and the anti-meridian have no direction.
    pub fn direction(self) -> Option<RotationalDirection> {
        if self.angle() == f64::from(HALF_TURN_DEG) {
            return None;
        }

        if self.0 > 0.0 {
            Some(East)
        } else if self.0 < 0.0 {
            Some(West)
        } else {
            None
        }
    }

    /// Detect the shape of the text without converting it into a number.
    ///
    /// # Errors
    /// The number of components is wrong or the hemisphere letter is misplaced.
    pub fn form_of(s: &str) -> Result<ParsedForm, ParseCoordinateError> {
        <Self as ParsedCoordinate>::form_of(s)
    }
}

impl ParsedCoordinate for Longitude {
    type Direction = RotationalDirection;

    const AXIS: &'static str = "longitude";

    fn with_degrees(degrees: f64) -> Result<Self, OutOfRange> {
        let max = f64::from(HALF_TURN_DEG);
        if (-max..=max).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(OutOfRange::ReflexAngle)
        }
    }
}

impl TryFrom<f64> for Longitude {
    type Error = OutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::with_degrees(value)
    }
}

impl From<Longitude> for f64 {
    fn from(lon: Longitude) -> Self {
        lon.degrees()
    }
}

impl FromStr for Longitude {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.angle())?;

            if let Some(direction) = self.direction() {
                write!(f, "{}", direction)
            } else {
                Ok(())
            }
        } else {
            write!(f, "{}", self.0)
        }
    }
}



#[cfg(test)]
mod bad_parse_tests {
    use super::*;

    fn parse(s: &str) -> Result<Longitude, ParseCoordinateError> {
        s.parse()
    }

    #[test]
    fn empty() {
        assert_eq!(parse(""), Err(ParseCoordinateError::EmptyString));
    }

    #[test]
    fn contradictory_sign() {
        assert!(parse("-122 W").is_err());
        assert!(parse("-122W").is_err());
        assert!(parse("-122 30 15 W").is_err());
    }

    #[test]
    fn too_big_angle() {
        assert_eq!(
            parse("180.5"),
            Err(ParseCoordinateError::Angle(OutOfRange::ReflexAngle.into()))
        );
        assert!(parse("180 1 W").is_err());
        assert!(parse("inf").is_err());
    }

    #[test]
    fn latitude_letters() {
        assert!(parse("45 N").is_err());
        assert!(parse("45S").is_err());
    }

    #[test]
    fn bad_minutes() {
        assert!(parse("122 75 W").is_err());
    }

    #[test]
    fn too_many_tokens() {
        assert!(parse("1 2 3 4 5 6").is_err());
    }
}
