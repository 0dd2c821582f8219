//! Geographic areas: axis-aligned rectangles and circles.

use geo::{BoundingRect, LineString, Rect};

use crate::container::{Item, ItemList};
use crate::{Capability, Coordinates, MapsError, Result, closed_enum};

closed_enum! {
    /// Shape of an [`Area`].
    pub enum AreaKind: "area kind" {
        /// Rectangle given by its north-west and south-east corners.
        Rectangle = 0,
        /// Circle given by its centre and radius.
        Circle = 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Rectangle {
        top_left: Coordinates,
        bottom_right: Coordinates,
    },
    Circle {
        center: Coordinates,
        radius: f64,
    },
}

/// A rectangle or a circle on the globe.
///
/// Corner and centre coordinates are embedded by value. Kind-specific
/// accessors fail with [`MapsError::InvalidOperation`] when asked about the
/// other shape.
///
/// # Examples
/// ```
/// use maps_core::{Area, AreaKind, Capability, Coordinates, StaticGate};
///
/// let cap = Capability::acquire(&StaticGate(true))?;
/// let center = Coordinates::new(cap, 37.56, 126.97)?;
/// let area = Area::circle(cap, &center, 250.0)?;
/// assert_eq!(area.kind(), AreaKind::Circle);
/// assert_eq!(area.radius()?, 250.0);
/// assert!(area.top_left().is_err());
/// # Ok::<(), maps_core::MapsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    shape: Shape,
}

const WRONG_SHAPE: MapsError = MapsError::InvalidOperation {
    reason: "field does not belong to this area kind",
};

impl Area {
    /// Construct a rectangle from copies of its corners.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] when either corner is invalid.
    pub fn rectangle(
        _cap: Capability,
        top_left: &Coordinates,
        bottom_right: &Coordinates,
    ) -> Result<Self> {
        if !Coordinates::is_valid(Some(top_left)) || !Coordinates::is_valid(Some(bottom_right)) {
            return Err(MapsError::InvalidParameter {
                reason: "rectangle corner is not a valid coordinate",
            });
        }
        Ok(Self {
            shape: Shape::Rectangle {
                top_left: *top_left,
                bottom_right: *bottom_right,
            },
        })
    }

    /// Construct a circle from a copy of its centre and a radius.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] when the radius is not a
    /// positive finite number or the centre is invalid.
    pub fn circle(_cap: Capability, center: &Coordinates, radius: f64) -> Result<Self> {
        if !Coordinates::is_valid(Some(center)) {
            return Err(MapsError::InvalidParameter {
                reason: "circle centre is not a valid coordinate",
            });
        }
        if !valid_radius(radius) {
            return Err(MapsError::InvalidParameter {
                reason: "circle radius must be positive",
            });
        }
        Ok(Self {
            shape: Shape::Circle {
                center: *center,
                radius,
            },
        })
    }

    /// Smallest rectangle enclosing every point of `path`.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when `path` is empty.
    pub fn enclosing(cap: Capability, path: &ItemList<Coordinates>) -> Result<Self> {
        let line: LineString<f64> = path.iter().map(|c| geo::Coord::from(*c)).collect();
        let rect = line.bounding_rect().ok_or(MapsError::NotFound {
            what: "path point",
        })?;
        let top_left = Coordinates::new(cap, rect.max().y, rect.min().x)?;
        let bottom_right = Coordinates::new(cap, rect.min().y, rect.max().x)?;
        Self::rectangle(cap, &top_left, &bottom_right)
    }

    /// Shape of this area.
    #[must_use]
    pub const fn kind(&self) -> AreaKind {
        match self.shape {
            Shape::Rectangle { .. } => AreaKind::Rectangle,
            Shape::Circle { .. } => AreaKind::Circle,
        }
    }

    /// North-west corner of a rectangle.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidOperation`] for a circle.
    pub const fn top_left(&self) -> Result<Coordinates> {
        match self.shape {
            Shape::Rectangle { top_left, .. } => Ok(top_left),
            Shape::Circle { .. } => Err(WRONG_SHAPE),
        }
    }

    /// South-east corner of a rectangle.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidOperation`] for a circle.
    pub const fn bottom_right(&self) -> Result<Coordinates> {
        match self.shape {
            Shape::Rectangle { bottom_right, .. } => Ok(bottom_right),
            Shape::Circle { .. } => Err(WRONG_SHAPE),
        }
    }

    /// Centre of a circle.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidOperation`] for a rectangle.
    pub const fn center(&self) -> Result<Coordinates> {
        match self.shape {
            Shape::Circle { center, .. } => Ok(center),
            Shape::Rectangle { .. } => Err(WRONG_SHAPE),
        }
    }

    /// Radius of a circle.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidOperation`] for a rectangle.
    pub const fn radius(&self) -> Result<f64> {
        match self.shape {
            Shape::Circle { radius, .. } => Ok(radius),
            Shape::Rectangle { .. } => Err(WRONG_SHAPE),
        }
    }

    /// Rectangle as a `geo` rectangle in (longitude, latitude) axis order.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidOperation`] for a circle.
    pub fn to_rect(&self) -> Result<Rect<f64>> {
        let top_left = self.top_left()?;
        let bottom_right = self.bottom_right()?;
        Ok(Rect::new(
            geo::Coord::from(top_left),
            geo::Coord::from(bottom_right),
        ))
    }

    /// Return `true` for a present area whose members satisfy its shape.
    #[must_use]
    pub fn is_valid(area: Option<&Self>) -> bool {
        area.is_some_and(|a| match &a.shape {
            Shape::Rectangle {
                top_left,
                bottom_right,
            } => Coordinates::is_valid(Some(top_left)) && Coordinates::is_valid(Some(bottom_right)),
            Shape::Circle { center, radius } => {
                Coordinates::is_valid(Some(center)) && valid_radius(*radius)
            }
        })
    }
}

fn valid_radius(radius: f64) -> bool {
    radius.is_finite() && radius > 0.0
}

impl Item for Area {
    fn try_clone(&self) -> Result<Self> {
        let cap = Capability::held();
        match &self.shape {
            Shape::Rectangle {
                top_left,
                bottom_right,
            } => Self::rectangle(cap, top_left, bottom_right),
            Shape::Circle { center, radius } => Self::circle(cap, center, *radius),
        }
    }
}
