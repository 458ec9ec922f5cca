use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Some component of an angle exceeds its valid range
pub enum OutOfRange {
    /// minutes outside of `[0..60]`
    ArcMinutes,
    /// seconds outside of `[0..60]`
    ArcSeconds,
    /// |latitude| > 90
    ObtuseAngle,
    /// |longitude| > 180
    ReflexAngle,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ArcMinutes => "Angle's arc minute value not in range [0..60]",
            Self::ArcSeconds => "Angle's arc second value not in range [0..60]",
            Self::ObtuseAngle => {
                "Only right angles or less (<=90) are allowed, but obtuse one provided"
            }
            Self::ReflexAngle => {
                "Only straight angles or less (<=180) are allowed, but reflex one provided"
            }
        };

        write!(f, "{msg}")
    }
}

impl Error for OutOfRange {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Failed to turn the textual degrees, minutes and seconds into a number
pub enum ParseAngleError {
    /// The numbers were parsed, but some of them is too big or negative
    Range(OutOfRange),
    /// Some of the components is not a number
    Float(ParseFloatError),
    /// Both the degrees and the hemisphere letter claim the negative sign
    SignConflict,
}

enum_trivial_from_impl!(OutOfRange => ParseAngleError:Range);
enum_trivial_from_impl!(ParseFloatError => ParseAngleError:Float);

impl fmt::Display for ParseAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::SignConflict => {
                write!(f, "negative degrees cannot be combined with a S or W hemisphere")
            }
        }
    }
}

impl Error for ParseAngleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Float(inner) => Some(inner),
            Self::SignConflict => None,
        }
    }
}
