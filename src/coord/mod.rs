use std::{convert::TryFrom, error::Error, fmt};

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{OutOfRange, ParseAngleError, Sexagesimal},
    enum_trivial_from_impl,
    utils::StripChar,
};

pub use self::{
    lat::{Latitude, Pole},
    lon::{Longitude, RotationalDirection},
    point::{MemoryStore, Point, PositionStore},
};

mod lat;
mod lon;
mod point;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Failed to interpret the text as a coordinate
pub enum ParseCoordinateError {
    /// The components were found, but cannot be combined into a valid angle
    Angle(ParseAngleError),
    /// Nothing except the separators was provided
    EmptyString,
    /// Only 1 to 4 components (degrees, minutes, seconds, hemisphere) are allowed
    TokenCount(usize),
    /// Four components were found, but the last one is not a hemisphere letter
    NoHemisphere,
}

enum_trivial_from_impl!(ParseAngleError => ParseCoordinateError:Angle);

impl From<OutOfRange> for ParseCoordinateError {
    fn from(err: OutOfRange) -> Self {
        Self::Angle(err.into())
    }
}

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate parsing failed: ")?;
        match self {
            Self::Angle(inner) => write!(f, "{}", inner),
            Self::EmptyString => write!(f, "empty string provided"),
            Self::TokenCount(count) => write!(f, "expected 1 to 4 components, found {}", count),
            Self::NoHemisphere => write!(f, "direction (hemisphere) was not detected"),
        }
    }
}

impl Error for ParseCoordinateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Angle(inner) => Some(inner),
            _ => None,
        }
    }
}

lazy_static! {
    // anything which is neither a digit nor a letter, nor the dot or minus sign
    static ref RE_SEPARATOR: Regex =
        Regex::new(r"[^0-9A-Za-z.-]+").expect("Separator regex is valid");
}

/// Split the text into the (degree, minute, second, hemisphere) candidates
pub(crate) fn tokenize(s: &str) -> Vec<&str> {
    RE_SEPARATOR
        .split(s)
        .filter(|token| !token.is_empty())
        .collect()
}

/// The shape of the user input detected by the number of components
/// and the presence of the hemisphere letter.
///
/// The `H` suffix means the letter is glued to the last number (`45N`),
/// the `SpaceH` suffix means it stands alone (`45 N`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParsedForm {
    /// `-45.5`
    Dd,
    /// `45.5S`
    DdH,
    /// `45.5 S`
    DdSpaceH,
    /// `-45 30.5`
    Dm,
    /// `45 30.5S`
    DmH,
    /// `45 30.5 S`
    DmSpaceH,
    /// `-45 30 15.5`
    Dms,
    /// `45 30 15.5S`
    DmsH,
    /// `45 30 15.5 S`
    DmsSpaceH,
}

impl fmt::Display for ParsedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dd => "DD",
            Self::DdH => "DDH",
            Self::DdSpaceH => "DD H",
            Self::Dm => "DM",
            Self::DmH => "DMH",
            Self::DmSpaceH => "DM H",
            Self::Dms => "DMS",
            Self::DmsH => "DMSH",
            Self::DmsSpaceH => "DMS H",
        };
        write!(f, "{name}")
    }
}

/// The hemisphere letter defining the sign of a coordinate
pub(crate) trait Direction: Copy + fmt::Debug + TryFrom<char> {
    /// `S` and `W` produce negative coordinates
    fn is_negative(self) -> bool;
}

/// The token consisting of exactly one hemisphere letter
fn direction_of<D: Direction>(token: &str) -> Option<D> {
    let (rest, last) = token.trim().split_last()?;
    if rest.is_empty() {
        D::try_from(last).ok()
    } else {
        None
    }
}

/// The token ending with a hemisphere letter
fn split_direction<D: Direction>(token: &str) -> Option<(&str, D)> {
    let (rest, last) = token.split_last()?;
    D::try_from(last).ok().map(|direction| (rest, direction))
}

/// Textual components of a coordinate sorted out by their role
#[derive(Debug)]
pub(crate) struct Notation<'a, D> {
    form: ParsedForm,
    degrees: &'a str,
    minutes: Option<&'a str>,
    seconds: Option<&'a str>,
    direction: Option<D>,
}

impl<'a, D: Direction> Notation<'a, D> {
    fn new(form: ParsedForm, parts: &[&'a str], direction: Option<D>) -> Self {
        Self {
            form,
            degrees: parts[0],
            minutes: parts.get(1).copied(),
            seconds: parts.get(2).copied(),
            direction,
        }
    }

    fn classify(tokens: &[&'a str]) -> Result<Self, ParseCoordinateError> {
        use ParsedForm::*;

        let notation = match *tokens {
            [] => return Err(ParseCoordinateError::EmptyString),
            [deg] => match split_direction(deg) {
                Some((deg, direction)) => Self::new(DdH, &[deg], Some(direction)),
                None => Self::new(Dd, &[deg], None),
            },
            [deg, min] => {
                if let Some(direction) = direction_of(min) {
                    Self::new(DdSpaceH, &[deg], Some(direction))
                } else if let Some((min, direction)) = split_direction(min) {
                    Self::new(DmH, &[deg, min], Some(direction))
                } else {
                    Self::new(Dm, &[deg, min], None)
                }
            }
            [deg, min, sec] => {
                if let Some(direction) = direction_of(sec) {
                    Self::new(DmSpaceH, &[deg, min], Some(direction))
                } else if let Some((sec, direction)) = split_direction(sec) {
                    Self::new(DmsH, &[deg, min, sec], Some(direction))
                } else {
                    Self::new(Dms, &[deg, min, sec], None)
                }
            }
            [deg, min, sec, hemisphere] => {
                let direction =
                    direction_of(hemisphere).ok_or(ParseCoordinateError::NoHemisphere)?;
                Self::new(DmsSpaceH, &[deg, min, sec], Some(direction))
            }
            _ => return Err(ParseCoordinateError::TokenCount(tokens.len())),
        };

        Ok(notation)
    }

    fn to_decimal(&self) -> Result<f64, ParseAngleError> {
        let negative_hemisphere = self.direction.map_or(false, Direction::is_negative);
        Sexagesimal::parse(self.degrees, self.minutes, self.seconds)?
            .to_decimal(negative_hemisphere)
    }
}

/// Parsing a coordinate from the free-form text with a common algorithm:
/// split into tokens, detect the [`ParsedForm`], convert into decimal degrees
/// and finally check the range of the axis.
pub(crate) trait ParsedCoordinate: Sized {
    type Direction: Direction;

    /// The name of the axis for the logs
    const AXIS: &'static str;

    /// Check the signed decimal degrees against the axis range
    fn with_degrees(degrees: f64) -> Result<Self, OutOfRange>;

    fn notation(s: &str) -> Result<Notation<'_, Self::Direction>, ParseCoordinateError> {
        let tokens = tokenize(s);
        debug!("{} tokens: {:?}", Self::AXIS, tokens);

        let notation = Notation::classify(&tokens)?;
        debug!("{}", notation.form);
        Ok(notation)
    }

    fn form_of(s: &str) -> Result<ParsedForm, ParseCoordinateError> {
        Self::notation(s).map(|notation| notation.form)
    }

    fn parse(s: &str) -> Result<Self, ParseCoordinateError> {
        let degrees = Self::notation(s)?.to_decimal()?;
        let coord = Self::with_degrees(degrees).map_err(|err| {
            warn!("out of bounds: {}", degrees);
            err
        })?;

        debug!("{}: {}", Self::AXIS, degrees);
        Ok(coord)
    }
}

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum for the hemisphere letters
macro_rules! bool_enum {
    ($name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal with $parse_err:ident) => {
        use self::$name::{$falsy, $truthy};

        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[doc = concat!("The hemisphere letter: '", $true_ch, "' or '", $false_ch, "'")]
        pub enum $name {
            #[doc = concat!("'", $true_ch, "', positive coordinates")]
            $truthy,
            #[doc = concat!("'", $false_ch, "', negative coordinates")]
            $falsy,
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        impl $crate::coord::Direction for $name {
            fn is_negative(self) -> bool {
                self == $falsy
            }
        }

        #[derive(Debug, Copy, Clone)]
        #[doc = concat!("The character is not a valid ", stringify!($name))]
        pub struct $parse_err {
            failed: char,
        }

        impl ::std::fmt::Display for $parse_err {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "Cannot parse {} from {:?}",
                    stringify!($name),
                    self.failed
                )
            }
        }

        impl ::std::error::Error for $parse_err {}

        impl ::std::convert::TryFrom<char> for $name {
            type Error = $parse_err;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c {
                    $true_ch => Ok($truthy),
                    $false_ch => Ok($falsy),
                    _ => Err($parse_err { failed: c }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let symbol = match self {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                };
                write!(f, "{}", symbol)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lat_form(s: &str) -> ParsedForm {
        Latitude::form_of(s).unwrap()
    }

    fn lon_form(s: &str) -> ParsedForm {
        Longitude::form_of(s).unwrap()
    }

    #[test]
    fn tokens_split_on_any_separator() {
        assert_eq!(tokenize("40°26′46″N"), ["40", "26", "46", "N"]);
        assert_eq!(tokenize("40 26' 46\" N"), ["40", "26", "46", "N"]);
        assert_eq!(tokenize("-45.5,  30"), ["-45.5", "30"]);
        assert_eq!(tokenize("12_30"), ["12", "30"]);
    }

    #[test]
    fn tokens_ignore_leading_and_trailing_separators() {
        assert_eq!(tokenize("  45 N "), ["45", "N"]);
    }

    #[test]
    fn no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ° ' ").is_empty());
    }

    #[test]
    fn single_token_forms() {
        assert_eq!(lat_form("45"), ParsedForm::Dd);
        assert_eq!(lat_form("45N"), ParsedForm::DdH);
        assert_eq!(lon_form("45W"), ParsedForm::DdH);
        // not a longitude letter
        assert_eq!(lon_form("45N"), ParsedForm::Dd);
    }

    #[test]
    fn two_token_forms() {
        assert_eq!(lat_form("45 S"), ParsedForm::DdSpaceH);
        assert_eq!(lat_form("45 30S"), ParsedForm::DmH);
        assert_eq!(lat_form("45 30"), ParsedForm::Dm);
        assert_eq!(lon_form("122 E"), ParsedForm::DdSpaceH);
    }

    #[test]
    fn three_token_forms() {
        assert_eq!(lon_form("122 30 W"), ParsedForm::DmSpaceH);
        assert_eq!(lon_form("122 30 15W"), ParsedForm::DmsH);
        assert_eq!(lon_form("122 30 15"), ParsedForm::Dms);
    }

    #[test]
    fn four_token_forms() {
        assert_eq!(lat_form("40 26 46 N"), ParsedForm::DmsSpaceH);
        assert_eq!(
            Latitude::form_of("40 26 46 E"),
            Err(ParseCoordinateError::NoHemisphere)
        );
    }

    #[test]
    fn too_many_tokens() {
        assert_eq!(
            Latitude::form_of("40 26 46 12 N"),
            Err(ParseCoordinateError::TokenCount(5))
        );
    }

    #[test]
    fn empty() {
        assert_eq!(
            Longitude::form_of(""),
            Err(ParseCoordinateError::EmptyString)
        );
    }

    #[test]
    fn form_names() {
        assert_eq!(ParsedForm::DmsSpaceH.to_string(), "DMS H");
        assert_eq!(ParsedForm::DdH.to_string(), "DDH");
    }

    #[test]
    fn error_display() {
        let err = "45 75".parse::<Latitude>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Coordinate parsing failed: Cannot parse angle: \
             Angle's arc minute value not in range [0..60]"
        );
    }
}
