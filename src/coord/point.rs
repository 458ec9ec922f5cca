use std::fmt;

use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::OutOfRange;

use super::{lat::Latitude, lon::Longitude, ParseCoordinateError};

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The point on the surface of an ellipsoid, represented as the pair (latitude, longitude)
pub struct Point {
    lat: Latitude,
    lon: Longitude,
}

impl Point {
    /// The location proposed when nothing better is known
    /// (Durham, New Hampshire).
    pub const FALLBACK: Self = Self {
        lat: Latitude(43.135_55),
        lon: Longitude(-70.939_5),
    };

    /// Construct a point from the given latitude and longitude
    pub const fn new(lat: Latitude, lon: Longitude) -> Self {
        Self { lat, lon }
    }

    /// Construct a point from the signed decimal degrees.
    ///
    /// # Errors
    /// Any of the values is out of its axis range.
    pub fn with_coordinates(lat: f64, lon: f64) -> Result<Self, OutOfRange> {
        let lat = Latitude::try_from(lat)?;
        let lon = Longitude::try_from(lon)?;
        Ok(Self { lat, lon })
    }

    /// The latitude of the point
    pub const fn lat(&self) -> Latitude {
        self.lat
    }

    /// The longitude of the point
    pub const fn lon(&self) -> Longitude {
        self.lon
    }

    /// Interpret both the textual latitude and longitude.
    ///
    /// # Errors
    /// The first error of the latitude or longitude parsing.
    pub fn try_parse(lat: &str, lon: &str) -> Result<Self, ParseCoordinateError> {
        let lat = lat.parse::<Latitude>()?;
        let lon = lon.parse::<Longitude>()?;
        Ok(Self { lat, lon })
    }

    /// Interpret both the textual latitude and longitude.
    /// Nothing is returned unless both are valid.
    pub fn parse(lat: &str, lon: &str) -> Option<Self> {
        Self::try_parse(lat, lon).ok()
    }

    /// Choose the location to propose to a user as the initial input:
    ///
    /// 1. the `explicit` pair of values, if provided (or the fallback, if they are not numbers);
    /// 2. the current navigation fix;
    /// 3. the last location accepted from a user;
    /// 4. the [fallback](#associatedconstant.FALLBACK) location.
    pub fn prompt_default<S>(explicit: Option<(&str, &str)>, nav: Option<Self>, store: &S) -> Self
    where
        S: PositionStore + ?Sized,
    {
        let point = if let Some((lat, lon)) = explicit {
            Self::from_numbers(lat, lon).unwrap_or(Self::FALLBACK)
        } else {
            nav.or_else(|| store.last_position())
                .unwrap_or(Self::FALLBACK)
        };

        debug!("default location: {}", point);
        point
    }

    fn from_numbers(lat: &str, lon: &str) -> Option<Self> {
        let lat = lat.trim().parse::<f64>().ok()?;
        let lon = lon.trim().parse::<f64>().ok()?;
        Self::with_coordinates(lat, lon).ok()
    }

    /// Interpret the user input and remember the location on success.
    pub fn accept<S>(lat: &str, lon: &str, store: &mut S) -> Option<Self>
    where
        S: PositionStore + ?Sized,
    {
        let point = Self::parse(lat, lon)?;
        info!("accepted location: {:#}", point);
        store.remember_position(point);
        Some(point)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {:#}, Long: {:#}", self.lat, self.lon)
        } else {
            write!(f, "({},{})", self.lat, self.lon)
        }
    }
}

/// The storage of the last accepted location (e.g. the application settings)
pub trait PositionStore {
    /// The previously remembered location, if any
    fn last_position(&self) -> Option<Point>;

    /// Remember the location for the next time
    fn remember_position(&mut self, point: Point);
}

/// Keep the last location in memory only
#[derive(Debug, Default, Copy, Clone)]
pub struct MemoryStore {
    last: Option<Point>,
}

impl PositionStore for MemoryStore {
    fn last_position(&self) -> Option<Point> {
        self.last
    }

    fn remember_position(&mut self, point: Point) {
        self.last = Some(point);
    }
}
