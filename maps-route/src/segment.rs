//! Route segments: the legs a route is divided into.

use log::debug;
use maps_core::lifecycle::{Entity, Field, FieldKind, deep_copy, if_present};
use maps_core::{
    Area, Capability, Coordinates, Item, ItemList, MapsError, Result, ServiceData, SupportedData,
    is_data_supported,
};

use crate::maneuver::RouteManeuver;

/// One leg of a route with its own geometry and maneuvers.
///
/// Access to the path and to the maneuvers is gated by the segment's
/// declared [`SupportedData`]. Without a declaration both are available.
///
/// # Examples
/// ```
/// use maps_core::{Capability, ServiceData, StaticGate, SupportedData};
/// use maps_route::RouteSegment;
///
/// let cap = Capability::acquire(&StaticGate(true))?;
/// let mut segment = RouteSegment::new(cap);
/// assert!(segment.is_data_supported(ServiceData::RouteSegmentsManeuvers));
///
/// segment.set_supported_data(&SupportedData::from_kinds(&[ServiceData::RouteSegmentsPath])?)?;
/// assert!(segment.foreach_maneuver(|_, _, _| true).is_err());
/// # Ok::<(), maps_core::MapsError>(())
/// ```
#[derive(Debug, PartialEq)]
pub struct RouteSegment {
    origin: Option<Coordinates>,
    destination: Option<Coordinates>,
    bounding_box: Option<Area>,
    distance: f64,
    duration: i64,
    path: ItemList<Coordinates>,
    maneuvers: ItemList<RouteManeuver>,
    supported_data: Option<SupportedData>,
}

impl RouteSegment {
    /// Construct a blank segment.
    #[must_use]
    pub const fn new(_cap: Capability) -> Self {
        Self {
            origin: None,
            destination: None,
            bounding_box: None,
            distance: 0.0,
            duration: 0,
            path: ItemList::new(),
            maneuvers: ItemList::new(),
            supported_data: None,
        }
    }

    /// Copy of the origin.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when no origin has been set.
    pub fn origin(&self) -> Result<Coordinates> {
        self.origin
            .as_ref()
            .ok_or(MapsError::NotFound { what: "origin" })?
            .try_clone()
    }

    /// Store a copy of `origin`.
    pub const fn set_origin(&mut self, origin: &Coordinates) {
        self.origin = Some(*origin);
    }

    /// Copy of the destination.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when no destination has been set.
    pub fn destination(&self) -> Result<Coordinates> {
        self.destination
            .as_ref()
            .ok_or(MapsError::NotFound {
                what: "destination",
            })?
            .try_clone()
    }

    /// Store a copy of `destination`.
    pub const fn set_destination(&mut self, destination: &Coordinates) {
        self.destination = Some(*destination);
    }

    /// Copy of the bounding box.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when no bounding box has been set.
    pub fn bounding_box(&self) -> Result<Area> {
        self.bounding_box
            .as_ref()
            .ok_or(MapsError::NotFound {
                what: "bounding box",
            })?
            .try_clone()
    }

    /// Store a copy of `bounding_box`.
    ///
    /// # Errors
    /// Returns the error raised while copying the area.
    pub fn set_bounding_box(&mut self, bounding_box: &Area) -> Result<()> {
        self.bounding_box = Some(bounding_box.try_clone()?);
        Ok(())
    }

    /// Length of the segment.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Set the length of the segment.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] for a negative or non-finite
    /// value.
    pub fn set_distance(&mut self, distance: f64) -> Result<()> {
        self.distance = crate::non_negative_distance(distance)?;
        Ok(())
    }

    /// Travel time across the segment in seconds.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.duration
    }

    /// Set the travel time in seconds.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] for a negative value.
    pub fn set_duration(&mut self, duration: i64) -> Result<()> {
        self.duration = crate::non_negative_duration(duration)?;
        Ok(())
    }

    /// Replace the path with a copy of `path`.
    ///
    /// # Errors
    /// Returns the error raised while copying; the old path is kept.
    pub fn set_path(&mut self, path: &ItemList<Coordinates>) -> Result<()> {
        self.path = path.try_clone()?;
        Ok(())
    }

    /// Visit a copy of each path point in order.
    ///
    /// # Errors
    /// Returns [`MapsError::NotSupported`] when segment paths are declared
    /// absent, before `callback` is ever invoked.
    pub fn foreach_path<F>(&self, callback: F) -> Result<usize>
    where
        F: FnMut(usize, usize, Coordinates) -> bool,
    {
        self.require(ServiceData::RouteSegmentsPath)?;
        self.path.foreach(callback)
    }

    /// Replace the maneuvers with a copy of `maneuvers`.
    ///
    /// # Errors
    /// Returns the error raised while copying; the old list is kept.
    pub fn set_maneuvers(&mut self, maneuvers: &ItemList<RouteManeuver>) -> Result<()> {
        self.maneuvers = maneuvers.try_clone()?;
        Ok(())
    }

    /// Append a copy of `maneuver`.
    ///
    /// # Errors
    /// Returns the error raised while copying or growing the list.
    pub fn append_maneuver(&mut self, maneuver: &RouteManeuver) -> Result<()> {
        self.maneuvers.append(maneuver)
    }

    /// Visit a copy of each maneuver in order.
    ///
    /// # Errors
    /// Returns [`MapsError::NotSupported`] when maneuvers are declared
    /// absent, before `callback` is ever invoked.
    pub fn foreach_maneuver<F>(&self, callback: F) -> Result<usize>
    where
        F: FnMut(usize, usize, RouteManeuver) -> bool,
    {
        self.require(ServiceData::RouteSegmentsManeuvers)?;
        self.maneuvers.foreach(callback)
    }

    /// Declare which data kinds this segment carries.
    ///
    /// # Errors
    /// Returns the error raised while copying the set.
    pub fn set_supported_data(&mut self, supported: &SupportedData) -> Result<()> {
        self.supported_data = Some(supported.try_clone()?);
        Ok(())
    }

    pub(crate) fn install_supported_data(&mut self, supported: SupportedData) {
        self.supported_data = Some(supported);
    }

    /// Return `true` unless `kind` has been declared absent.
    #[must_use]
    pub fn is_data_supported(&self, kind: ServiceData) -> bool {
        is_data_supported(self.supported_data.as_ref(), kind)
    }

    fn require(&self, kind: ServiceData) -> Result<()> {
        if self.is_data_supported(kind) {
            Ok(())
        } else {
            debug!("segment refused access to {}", kind.name());
            Err(MapsError::NotSupported { what: kind.name() })
        }
    }
}

impl Entity for RouteSegment {
    const NAME: &'static str = "route segment";
    const FIELDS: &'static [Field<Self>] = &[
        Field::new("origin", FieldKind::OwnedHandle, |src, dst| {
            if let Some(origin) = if_present(src.origin())? {
                dst.set_origin(&origin);
            }
            Ok(())
        }),
        Field::new("destination", FieldKind::OwnedHandle, |src, dst| {
            if let Some(destination) = if_present(src.destination())? {
                dst.set_destination(&destination);
            }
            Ok(())
        }),
        Field::new("bounding_box", FieldKind::OwnedHandle, |src, dst| {
            if let Some(area) = if_present(src.bounding_box())? {
                dst.set_bounding_box(&area)?;
            }
            Ok(())
        }),
        Field::new("distance", FieldKind::Primitive, |src, dst| {
            dst.set_distance(src.distance())
        }),
        Field::new("duration", FieldKind::Primitive, |src, dst| {
            dst.set_duration(src.duration())
        }),
        Field::new("path", FieldKind::OwnedList, |src, dst| {
            dst.set_path(&src.path)
        }),
        Field::new("maneuvers", FieldKind::OwnedList, |src, dst| {
            dst.set_maneuvers(&src.maneuvers)
        }),
        Field::new("supported_data", FieldKind::OwnedMap, |src, dst| {
            if let Some(supported) = &src.supported_data {
                dst.set_supported_data(supported)?;
            }
            Ok(())
        }),
    ];

    fn blank(cap: Capability) -> Self {
        Self::new(cap)
    }
}

impl Item for RouteSegment {
    fn try_clone(&self) -> Result<Self> {
        deep_copy(self)
    }
}
