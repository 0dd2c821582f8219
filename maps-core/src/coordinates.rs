//! Geographic coordinates in WGS84 degrees.

use geo::Coord;

use crate::container::Item;
use crate::{Capability, MapsError, Result};

/// Southern latitude bound in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
/// Northern latitude bound in degrees.
pub const MAX_LATITUDE: f64 = 90.0;
/// Western longitude bound in degrees.
pub const MIN_LONGITUDE: f64 = -180.0;
/// Eastern longitude bound in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// A validated latitude/longitude pair.
///
/// Both fields stay inside their ranges for the life of the value: the
/// constructor and every mutator reject out-of-range input, including NaN.
///
/// # Examples
/// ```
/// use maps_core::{Capability, Coordinates, StaticGate};
///
/// let cap = Capability::acquire(&StaticGate(true))?;
/// let mut berlin = Coordinates::new(cap, 52.52, 13.405)?;
/// assert_eq!(berlin.latitude(), 52.52);
///
/// assert!(berlin.set_latitude(91.0).is_err());
/// assert_eq!(berlin.latitude(), 52.52);
/// # Ok::<(), maps_core::MapsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

fn check_latitude(latitude: f64) -> Result<f64> {
    if (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(MapsError::InvalidParameter {
            reason: "latitude outside [-90, 90]",
        })
    }
}

fn check_longitude(longitude: f64) -> Result<f64> {
    if (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(MapsError::InvalidParameter {
            reason: "longitude outside [-180, 180]",
        })
    }
}

impl Coordinates {
    /// Validate and construct a coordinate pair.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] when either value is outside
    /// its range.
    pub fn new(_cap: Capability, latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }

    /// Construct from a `geo` coordinate (`x` = longitude, `y` = latitude).
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] when either axis is out of
    /// range.
    pub fn from_coord(cap: Capability, coord: Coord<f64>) -> Result<Self> {
        Self::new(cap, coord.y, coord.x)
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude and longitude together.
    #[must_use]
    pub const fn lat_lon(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Replace the latitude.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] when out of range; the value
    /// is left unchanged.
    pub fn set_latitude(&mut self, latitude: f64) -> Result<()> {
        self.latitude = check_latitude(latitude)?;
        Ok(())
    }

    /// Replace the longitude.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] when out of range; the value
    /// is left unchanged.
    pub fn set_longitude(&mut self, longitude: f64) -> Result<()> {
        self.longitude = check_longitude(longitude)?;
        Ok(())
    }

    /// Replace both fields at once. Neither changes unless both are valid.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] when either value is out of
    /// range.
    pub fn set_lat_lon(&mut self, latitude: f64, longitude: f64) -> Result<()> {
        let checked = (check_latitude(latitude)?, check_longitude(longitude)?);
        (self.latitude, self.longitude) = checked;
        Ok(())
    }

    /// Return `true` for a present value with both fields in range.
    #[must_use]
    pub fn is_valid(coordinates: Option<&Self>) -> bool {
        coordinates.is_some_and(|c| {
            check_latitude(c.latitude).is_ok() && check_longitude(c.longitude).is_ok()
        })
    }
}

impl Item for Coordinates {
    fn try_clone(&self) -> Result<Self> {
        Self::new(Capability::held(), self.latitude, self.longitude)
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(value: Coordinates) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}
