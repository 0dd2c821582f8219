//! Complete routes returned by a routing provider.

use log::{debug, trace};
use maps_core::bounded::copy_bounded;
use maps_core::lifecycle::{Entity, Field, FieldKind, deep_copy, if_present};
use maps_core::{
    Area, Capability, Coordinates, Item, ItemList, MapsError, Result, ServiceData, StringTable,
    SupportedData, is_data_supported,
};

use crate::kinds::{DistanceUnit, TransportMode};
use crate::segment::RouteSegment;

/// Longest route identifier kept, in bytes.
pub const ROUTE_ID_MAX_LEN: usize = 64;

/// A route from origin to destination, split into segments.
///
/// The route owns its path, segments and properties exclusively. Setters
/// store copies and getters return copies. Path and segment access is gated
/// by the route's declared [`SupportedData`].
///
/// # Examples
/// ```
/// use maps_core::{Capability, Coordinates, StaticGate};
/// use maps_route::{Route, RouteSegment, TransportMode};
///
/// let cap = Capability::acquire(&StaticGate(true))?;
/// let mut route = Route::new(cap);
/// route.set_route_id("r-17")?;
/// route.set_origin(&Coordinates::new(cap, 37.5665, 126.978)?);
/// route.set_transport_mode(TransportMode::Pedestrian);
/// route.append_segment(&RouteSegment::new(cap))?;
///
/// let mut segments = 0;
/// route.foreach_segment(|_, _, _segment| {
///     segments += 1;
///     true
/// })?;
/// assert_eq!(segments, 1);
/// assert_eq!(route.route_id()?, "r-17");
/// # Ok::<(), maps_core::MapsError>(())
/// ```
///
/// A route cannot be built without a [`Capability`]:
/// ```compile_fail
/// let route = maps_route::Route::default();
/// ```
#[derive(Debug, PartialEq)]
pub struct Route {
    route_id: Option<String>,
    origin: Option<Coordinates>,
    destination: Option<Coordinates>,
    bounding_box: Option<Area>,
    transport_mode: TransportMode,
    total_distance: f64,
    total_duration: i64,
    distance_unit: DistanceUnit,
    path: ItemList<Coordinates>,
    segments: ItemList<RouteSegment>,
    properties: StringTable,
    supported_data: Option<SupportedData>,
}

impl Route {
    /// Construct a blank route.
    #[must_use]
    pub fn new(_cap: Capability) -> Self {
        Self {
            route_id: None,
            origin: None,
            destination: None,
            bounding_box: None,
            transport_mode: TransportMode::default(),
            total_distance: 0.0,
            total_duration: 0,
            distance_unit: DistanceUnit::default(),
            path: ItemList::new(),
            segments: ItemList::new(),
            properties: StringTable::new(),
            supported_data: None,
        }
    }

    /// Copy of the route identifier.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when no identifier has been set.
    pub fn route_id(&self) -> Result<String> {
        self.route_id
            .as_ref()
            .ok_or(MapsError::NotFound { what: "route id" })?
            .try_clone()
    }

    /// Store `route_id`, truncated to [`ROUTE_ID_MAX_LEN`] bytes.
    ///
    /// # Errors
    /// Returns [`MapsError::OutOfMemory`] when the copy cannot be allocated.
    pub fn set_route_id(&mut self, route_id: &str) -> Result<()> {
        self.route_id = Some(copy_bounded("route id", route_id, ROUTE_ID_MAX_LEN)?);
        Ok(())
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

    /// Means of travel.
    #[must_use]
    pub const fn transport_mode(&self) -> TransportMode {
        self.transport_mode
    }

    /// Set the means of travel.
    pub const fn set_transport_mode(&mut self, transport_mode: TransportMode) {
        self.transport_mode = transport_mode;
    }

    /// Total length, in [`Route::distance_unit`] units.
    #[must_use]
    pub const fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Set the total length.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] for a negative or non-finite
    /// value.
    pub fn set_total_distance(&mut self, total_distance: f64) -> Result<()> {
        self.total_distance = crate::non_negative_distance(total_distance)?;
        Ok(())
    }

    /// Total travel time in seconds.
    #[must_use]
    pub const fn total_duration(&self) -> i64 {
        self.total_duration
    }

    /// Set the total travel time in seconds.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] for a negative value.
    pub fn set_total_duration(&mut self, total_duration: i64) -> Result<()> {
        self.total_duration = crate::non_negative_duration(total_duration)?;
        Ok(())
    }

    /// Unit of [`Route::total_distance`].
    #[must_use]
    pub const fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    /// Set the distance unit.
    pub const fn set_distance_unit(&mut self, distance_unit: DistanceUnit) {
        self.distance_unit = distance_unit;
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
    /// Returns [`MapsError::NotSupported`] when the route path is declared
    /// absent, before `callback` is ever invoked.
    pub fn foreach_path<F>(&self, callback: F) -> Result<usize>
    where
        F: FnMut(usize, usize, Coordinates) -> bool,
    {
        self.require(ServiceData::RoutePath)?;
        self.path.foreach(callback)
    }

    /// Replace the segments with a copy of `segments`.
    ///
    /// # Errors
    /// Returns the error raised while copying; the old list is kept.
    pub fn set_segments(&mut self, segments: &ItemList<RouteSegment>) -> Result<()> {
        self.segments = segments.try_clone()?;
        Ok(())
    }

    /// Append a copy of `segment`.
    ///
    /// The route's supported-data declaration is not applied to the new
    /// segment; only segments present when it was set received it.
    ///
    /// # Errors
    /// Returns the error raised while copying or growing the list.
    pub fn append_segment(&mut self, segment: &RouteSegment) -> Result<()> {
        self.segments.append(segment)
    }

    /// Visit a copy of each segment in order.
    ///
    /// # Errors
    /// Returns [`MapsError::NotSupported`] when neither segment paths nor
    /// segment maneuvers are declared available, before `callback` is ever
    /// invoked.
    pub fn foreach_segment<F>(&self, callback: F) -> Result<usize>
    where
        F: FnMut(usize, usize, RouteSegment) -> bool,
    {
        if !self.is_data_supported(ServiceData::RouteSegmentsPath)
            && !self.is_data_supported(ServiceData::RouteSegmentsManeuvers)
        {
            debug!("route refused access to segments");
            return Err(MapsError::NotSupported {
                what: "route segments",
            });
        }
        self.segments.foreach(callback)
    }

    /// Store a copy of `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns the error raised while copying or growing the table.
    pub fn set_property(&mut self, key: &str, value: &str) -> Result<()> {
        self.properties.set(key, &value.to_owned())
    }

    /// Copy of the property stored under `key`.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when `key` is absent.
    pub fn property(&self, key: &str) -> Result<String> {
        self.properties.get(key)
    }

    /// Replace all properties with a copy of `properties`.
    ///
    /// # Errors
    /// Returns the error raised while copying; the old table is kept.
    pub fn set_properties(&mut self, properties: &StringTable) -> Result<()> {
        self.properties = properties.try_clone()?;
        Ok(())
    }

    /// Visit a copy of each property in unspecified order.
    ///
    /// # Errors
    /// Returns the error raised while copying an entry.
    pub fn foreach_property<F>(&self, callback: F) -> Result<usize>
    where
        F: FnMut(usize, usize, String, String) -> bool,
    {
        self.properties.foreach(callback)
    }

    /// Declare which data kinds this route carries.
    ///
    /// The declaration is also pushed onto every segment currently attached.
    /// Segments appended afterwards keep their own declaration.
    ///
    /// Every copy is built before any is stored, so on failure the route and
    /// its segments keep their previous declarations.
    ///
    /// # Errors
    /// Returns the error raised while copying the set.
    pub fn set_supported_data(&mut self, supported: &SupportedData) -> Result<()> {
        let own = supported.try_clone()?;
        let mut copies = Vec::new();
        copies
            .try_reserve_exact(self.segments.len())
            .map_err(|_| MapsError::OutOfMemory)?;
        for _ in self.segments.iter() {
            copies.push(supported.try_clone()?);
        }

        self.supported_data = Some(own);
        for (segment, copy) in self.segments.iter_mut().zip(copies) {
            segment.install_supported_data(copy);
        }
        trace!(
            "pushed supported data onto {} attached segments",
            self.segments.len()
        );
        Ok(())
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
            debug!("route refused access to {}", kind.name());
            Err(MapsError::NotSupported { what: kind.name() })
        }
    }
}

impl Entity for Route {
    const NAME: &'static str = "route";
    const FIELDS: &'static [Field<Self>] = &[
        Field::new("route_id", FieldKind::Primitive, |src, dst| {
            if let Some(id) = if_present(src.route_id())? {
                dst.set_route_id(&id)?;
            }
            Ok(())
        }),
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
        Field::new("transport_mode", FieldKind::Primitive, |src, dst| {
            dst.set_transport_mode(src.transport_mode());
            Ok(())
        }),
        Field::new("total_distance", FieldKind::Primitive, |src, dst| {
            dst.set_total_distance(src.total_distance())
        }),
        Field::new("total_duration", FieldKind::Primitive, |src, dst| {
            dst.set_total_duration(src.total_duration())
        }),
        Field::new("distance_unit", FieldKind::Primitive, |src, dst| {
            dst.set_distance_unit(src.distance_unit());
            Ok(())
        }),
        Field::new("path", FieldKind::OwnedList, |src, dst| {
            dst.set_path(&src.path)
        }),
        // Replayed while the target has no segments, so copied segments keep
        // their own declarations.
        Field::new("supported_data", FieldKind::OwnedMap, |src, dst| {
            if let Some(supported) = &src.supported_data {
                dst.set_supported_data(supported)?;
            }
            Ok(())
        }),
        Field::new("segments", FieldKind::OwnedList, |src, dst| {
            dst.set_segments(&src.segments)
        }),
        Field::new("properties", FieldKind::OwnedMap, |src, dst| {
            dst.set_properties(&src.properties)
        }),
    ];

    fn blank(cap: Capability) -> Self {
        Self::new(cap)
    }
}

impl Item for Route {
    fn try_clone(&self) -> Result<Self> {
        deep_copy(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maps_core::test_support::{open_capability, path};
    use rstest::{fixture, rstest};

    #[fixture]
    fn cap() -> Capability {
        open_capability().expect("open gate")
    }

    #[fixture]
    fn route(cap: Capability) -> Route {
        let mut route = Route::new(cap);
        route.set_route_id("route-1").expect("set");
        route.set_origin(&Coordinates::new(cap, 0.0, 0.0).expect("in range"));
        route.set_destination(&Coordinates::new(cap, 1.0, 1.0).expect("in range"));
        route
            .set_path(&path(&[(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)]).expect("path"))
            .expect("set");
        route.set_total_distance(157.2).expect("set");
        route.set_total_duration(600).expect("set");
        route.set_property("toll", "no").expect("set");
        route.append_segment(&RouteSegment::new(cap)).expect("append");
        route
    }

    fn only(kinds: &[ServiceData]) -> SupportedData {
        SupportedData::from_kinds(kinds).expect("set")
    }

    #[rstest]
    fn default_route_supports_every_kind(cap: Capability) {
        let route = Route::new(cap);
        assert!(
            ServiceData::ALL
                .iter()
                .all(|kind| route.is_data_supported(*kind))
        );
    }

    #[rstest]
    fn path_gate_refuses_before_callback(mut route: Route) {
        route
            .set_supported_data(&only(&[ServiceData::RouteSegmentsPath]))
            .expect("set");
        let mut called = false;
        let err = route
            .foreach_path(|_, _, _| {
                called = true;
                true
            })
            .expect_err("path declared absent");
        assert!(matches!(err, MapsError::NotSupported { .. }));
        assert!(!called);
    }

    #[rstest]
    fn segments_need_path_or_maneuvers(mut route: Route) {
        route
            .set_supported_data(&only(&[ServiceData::RouteSegmentsManeuvers]))
            .expect("set");
        assert_eq!(route.foreach_segment(|_, _, _| true).expect("segments"), 1);

        route
            .set_supported_data(&only(&[ServiceData::RoutePath]))
            .expect("set");
        assert!(matches!(
            route.foreach_segment(|_, _, _| true),
            Err(MapsError::NotSupported { .. })
        ));
    }

    #[rstest]
    fn supported_data_is_pushed_to_attached_segments_only(cap: Capability, mut route: Route) {
        route
            .set_supported_data(&only(&[ServiceData::RouteSegmentsPath]))
            .expect("set");
        route.append_segment(&RouteSegment::new(cap)).expect("append");

        let mut gated = Vec::new();
        route
            .foreach_segment(|_, _, segment| {
                gated.push(!segment.is_data_supported(ServiceData::RouteSegmentsManeuvers));
                true
            })
            .expect("segments");
        assert_eq!(gated, vec![true, false]);
    }

    #[rstest]
    fn redeclaration_reaches_every_attached_segment(cap: Capability, mut route: Route) {
        route.append_segment(&RouteSegment::new(cap)).expect("append");
        route.append_segment(&RouteSegment::new(cap)).expect("append");
        route
            .set_supported_data(&only(&[ServiceData::RouteSegmentsManeuvers]))
            .expect("set");
        route
            .set_supported_data(&only(&[ServiceData::RouteSegmentsPath]))
            .expect("set");

        let mut declarations = Vec::new();
        route
            .foreach_segment(|_, _, segment| {
                declarations.push((
                    segment.is_data_supported(ServiceData::RouteSegmentsPath),
                    segment.is_data_supported(ServiceData::RouteSegmentsManeuvers),
                ));
                true
            })
            .expect("segments");
        assert_eq!(declarations, vec![(true, false); 3]);
        assert!(!route.is_data_supported(ServiceData::RoutePath));
    }

    #[rstest]
    fn clone_is_equal_and_independent(mut route: Route) {
        route
            .set_supported_data(&only(&[ServiceData::RoutePath]))
            .expect("set");
        let mut copy = route.try_clone().expect("clone");
        assert_eq!(copy, route);

        copy.set_property("toll", "yes").expect("set");
        copy.set_path(&ItemList::new()).expect("set");
        assert_eq!(route.property("toll").expect("present"), "no");
        assert_eq!(route.foreach_path(|_, _, _| true).expect("path"), 3);
    }

    #[rstest]
    fn clone_keeps_segment_declarations(cap: Capability, mut route: Route) {
        route
            .set_supported_data(&only(&[ServiceData::RouteSegmentsPath]))
            .expect("set");
        route.append_segment(&RouteSegment::new(cap)).expect("append");
        let copy = route.try_clone().expect("clone");
        assert_eq!(copy, route);
    }

    #[rstest]
    fn dropping_clone_leaves_original_intact(route: Route) {
        let copy = route.try_clone().expect("clone");
        drop(copy);
        assert_eq!(route.origin().expect("set").lat_lon(), (0.0, 0.0));
        assert_eq!(route.foreach_segment(|_, _, _| true).expect("segments"), 1);
    }

    #[rstest]
    fn long_route_id_is_truncated(mut route: Route) {
        let long = "r".repeat(ROUTE_ID_MAX_LEN + 1);
        route.set_route_id(&long).expect("truncated");
        assert_eq!(route.route_id().expect("set").len(), ROUTE_ID_MAX_LEN);
    }

    #[rstest]
    #[case(-0.5)]
    #[case(f64::INFINITY)]
    fn total_distance_must_be_non_negative(mut route: Route, #[case] distance: f64) {
        assert!(route.set_total_distance(distance).is_err());
        assert_eq!(route.total_distance(), 157.2);
    }

    #[rstest]
    fn unset_optional_fields_are_not_found(cap: Capability) {
        let route = Route::new(cap);
        assert!(matches!(route.origin(), Err(MapsError::NotFound { .. })));
        assert!(matches!(
            route.bounding_box(),
            Err(MapsError::NotFound { .. })
        ));
        assert!(matches!(route.route_id(), Err(MapsError::NotFound { .. })));
    }
}
