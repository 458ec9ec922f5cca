use std::{convert::TryFrom, fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{OutOfRange, QUARTER_TURN_DEG},
    bool_enum,
};

use super::{ParseCoordinateError, ParsedCoordinate, ParsedForm};

bool_enum!(Pole: North and South; parse from 'N':'S' with ParsePoleError);

/// The angle measured between the equatorial plane and the point along the meridian,
/// in signed decimal degrees (`-90..=90`, negative to the south).
/// [Read more](https://en.wikipedia.org/wiki/Latitude).
#[derive(Debug, PartialOrd, PartialEq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Latitude(pub(super) f64);

impl Latitude {
    /// The central latitude of the sphere equidistant from the poles
    pub const fn equator() -> Self {
        Self(0.0)
    }

    /// Signed decimal degrees
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// Angle between the latitude and the equator (absolute value of the latitude).
    pub fn angle_from_equator(self) -> f64 {
        self.0.abs()
    }

    /// Which pole are closer to the given latitude
    pub fn hemisphere(self) -> Option<Pole> {
        if self.0 > 0.0 {
            Some(North)
        } else if self.0 < 0.0 {
            Some(South)
        } else {
            None
        }
    }

    /// Is the given latitude belongs to a pole
    pub fn is_pole(self) -> bool {
        self.angle_from_equator() == f64::from(QUARTER_TURN_DEG)
    }

    /// Detect the shape of the text without converting it into a number.
    ///
    /// # Errors
    /// The number of components is wrong or the hemisphere letter is misplaced.
    pub fn form_of(s: &str) -> Result<ParsedForm, ParseCoordinateError> {
        <Self as ParsedCoordinate>::form_of(s)
    }
}

impl ParsedCoordinate for Latitude {
    type Direction = Pole;

    const AXIS: &'static str = "latitude";

    fn with_degrees(degrees: f64) -> Result<Self, OutOfRange> {
        let max = f64::from(QUARTER_TURN_DEG);
        if (-max..=max).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(OutOfRange::ObtuseAngle)
        }
    }
}

impl From<Pole> for Latitude {
    fn from(pole: Pole) -> Self {
        let max = f64::from(QUARTER_TURN_DEG);
        match pole {
            North => Self(max),
            South => Self(-max),
        }
    }
}

impl TryFrom<f64> for Latitude {
    type Error = OutOfRange;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::with_degrees(value)
    }
}

impl From<Latitude> for f64 {
    fn from(lat: Latitude) -> Self {
        lat.degrees()
    }
}

impl FromStr for Latitude {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.angle_from_equator())?;

            if let Some(hemisphere) = self.hemisphere() {
                write!(f, "{}", hemisphere)
            } else {
                Ok(())
            }
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator() {
        let equator = Latitude::equator();
        assert_eq!(equator, Latitude::default());
        assert!(equator.hemisphere().is_none());
        assert!(!equator.is_pole());
    }

    #[test]
    fn poles() {
        let north = Latitude::from(North);
        assert!(north.is_pole());
        assert_eq!(north.degrees(), 90.0);

        let south = Latitude::from(South);
        assert!(south.is_pole());
        assert_eq!(south.hemisphere(), Some(South));
    }

    #[test]
    fn south_less_than_north() {
        let parallels: Vec<Latitude> = [-90.0, -66.5628, -23.4367, 0.0, 23.4367, 66.5628, 90.0]
            .iter()
            .map(|&deg| Latitude::try_from(deg).unwrap())
            .collect();

        for pair in parallels.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    #[should_panic(expected = "ObtuseAngle")]
    fn bad_latitude_max() {
        let _l = Latitude::try_from(90.000_001).unwrap();
    }

    #[test]
    #[should_panic(expected = "ObtuseAngle")]
    fn bad_latitude_min() {
        let _l = Latitude::try_from(-91.0).unwrap();
    }

    #[test]
    fn pole_from_char() {
        assert_eq!(Pole::try_from('N').unwrap(), North);
        assert_eq!(Pole::try_from('S').unwrap(), South);
        assert!(Pole::try_from('n').is_err());
        assert!(Pole::try_from('E').is_err());
    }

    #[test]
    fn display() {
        let l: Latitude = "45 30 S".parse().unwrap();
        assert_eq!(format!("{}", l), "-45.5");
        assert_eq!(format!("{:#}", l), "45.5S");
        assert_eq!(format!("{:#}", Latitude::equator()), "0");
    }
}
