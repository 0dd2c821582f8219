#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural coverage for coordinate and area construction.

use std::cell::RefCell;

use maps_core::{Area, Capability, Coordinates, Item, MapsError, StaticGate};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Scenario state shared between steps.
#[derive(Debug, Default)]
struct GeometryWorld {
    capability: RefCell<Option<Capability>>,
    coordinates: RefCell<Option<Result<Coordinates, MapsError>>>,
    area: RefCell<Option<Result<Area, MapsError>>>,
}

impl GeometryWorld {
    fn capability(&self) -> Capability {
        self.capability
            .borrow()
            .unwrap_or_else(|| panic!("capability must be acquired first"))
    }

    fn last_error(&self) -> Option<MapsError> {
        let from_coordinates = self
            .coordinates
            .borrow()
            .as_ref()
            .and_then(|r| r.as_ref().err().cloned());
        from_coordinates.or_else(|| {
            self.area
                .borrow()
                .as_ref()
                .and_then(|r| r.as_ref().err().cloned())
        })
    }
}

#[fixture]
fn world() -> GeometryWorld {
    GeometryWorld::default()
}

#[given("an open maps capability")]
fn open_capability(world: &GeometryWorld) {
    let cap = Capability::acquire(&StaticGate(true)).expect("open gate");
    world.capability.replace(Some(cap));
}

#[when("I create coordinates at latitude {latitude} and longitude {longitude}")]
fn create_coordinates(world: &GeometryWorld, latitude: f64, longitude: f64) {
    let result = Coordinates::new(world.capability(), latitude, longitude);
    world.coordinates.replace(Some(result));
}

#[when("I create a circle of radius {radius} around latitude {latitude} and longitude {longitude}")]
fn create_circle(world: &GeometryWorld, radius: f64, latitude: f64, longitude: f64) {
    let cap = world.capability();
    let result = Coordinates::new(cap, latitude, longitude)
        .and_then(|center| Area::circle(cap, &center, radius));
    world.area.replace(Some(result));
}

#[then("the coordinates report latitude {latitude} and longitude {longitude}")]
fn coordinates_report(world: &GeometryWorld, latitude: f64, longitude: f64) {
    let borrowed = world.coordinates.borrow();
    let coordinates = borrowed
        .as_ref()
        .expect("coordinates should be recorded")
        .as_ref()
        .expect("coordinates should be valid");
    assert_eq!(coordinates.lat_lon(), (latitude, longitude));
}

#[then("a clone of the coordinates reports the same values")]
fn clone_matches(world: &GeometryWorld) {
    let borrowed = world.coordinates.borrow();
    let coordinates = borrowed
        .as_ref()
        .expect("coordinates should be recorded")
        .as_ref()
        .expect("coordinates should be valid");
    let copy = coordinates.try_clone().expect("clone");
    assert_eq!(copy.latitude(), coordinates.latitude());
    assert_eq!(copy.longitude(), coordinates.longitude());
}

#[then("creation fails with an invalid parameter error")]
fn invalid_parameter(world: &GeometryWorld) {
    match world.last_error() {
        Some(MapsError::InvalidParameter { .. }) => {}
        other => panic!("expected an invalid parameter error, got {other:?}"),
    }
}

#[then("the area is valid")]
fn area_valid(world: &GeometryWorld) {
    let borrowed = world.area.borrow();
    let area = borrowed
        .as_ref()
        .expect("area should be recorded")
        .as_ref()
        .expect("area should be constructed");
    assert!(Area::is_valid(Some(area)));
}

#[scenario(path = "tests/features/coordinates.feature", index = 0)]
fn valid_coordinates_survive_clone(world: GeometryWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/coordinates.feature", index = 1)]
fn latitude_beyond_pole(world: GeometryWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/coordinates.feature", index = 2)]
fn longitude_beyond_antimeridian(world: GeometryWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/coordinates.feature", index = 3)]
fn circle_needs_positive_radius(world: GeometryWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/coordinates.feature", index = 4)]
fn tiny_circle_is_valid(world: GeometryWorld) {
    let _ = world;
}
