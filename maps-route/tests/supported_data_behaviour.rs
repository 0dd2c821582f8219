#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural coverage for data-availability gating on routes.

use std::cell::RefCell;

use maps_core::test_support::{open_capability, path};
use maps_core::{MapsError, ServiceData, SupportedData};
use maps_route::{Route, RouteManeuver, RouteSegment};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Scenario state shared between steps.
#[derive(Debug, Default)]
struct SupportWorld {
    route: RefCell<Option<Route>>,
}

#[fixture]
fn world() -> SupportWorld {
    SupportWorld::default()
}

fn segment() -> RouteSegment {
    let cap = open_capability().expect("open gate");
    let mut segment = RouteSegment::new(cap);
    segment
        .set_path(&path(&[(0.0, 0.0), (0.1, 0.1)]).expect("path"))
        .expect("set path");
    segment
        .append_maneuver(&RouteManeuver::new(cap))
        .expect("append maneuver");
    segment
}

fn declare(world: &SupportWorld, kinds: &[ServiceData]) {
    let supported = SupportedData::from_kinds(kinds).expect("declaration");
    let mut borrowed = world.route.borrow_mut();
    let route = borrowed.as_mut().expect("route should be built");
    route.set_supported_data(&supported).expect("declare");
}

fn with_route<R>(world: &SupportWorld, f: impl FnOnce(&Route) -> R) -> R {
    let borrowed = world.route.borrow();
    f(borrowed.as_ref().expect("route should be built"))
}

#[given("a route with one segment")]
fn route_with_segment(world: &SupportWorld) {
    let cap = open_capability().expect("open gate");
    let mut route = Route::new(cap);
    route
        .set_path(&path(&[(0.0, 0.0), (0.1, 0.1)]).expect("path"))
        .expect("set path");
    route.append_segment(&segment()).expect("append segment");
    world.route.replace(Some(route));
}

#[when("the route declares only the route path")]
fn only_route_path(world: &SupportWorld) {
    declare(world, &[ServiceData::RoutePath]);
}

#[when("the route declares only segment paths")]
fn only_segment_paths(world: &SupportWorld) {
    declare(world, &[ServiceData::RouteSegmentsPath]);
}

#[when("another segment is appended")]
fn append_another(world: &SupportWorld) {
    let mut borrowed = world.route.borrow_mut();
    let route = borrowed.as_mut().expect("route should be built");
    route.append_segment(&segment()).expect("append segment");
}

#[then("the route path is accessible")]
fn path_accessible(world: &SupportWorld) {
    let visited = with_route(world, |route| route.foreach_path(|_, _, _| true));
    assert_eq!(visited.expect("path"), 2);
}

#[then("the route segments are accessible")]
fn segments_accessible(world: &SupportWorld) {
    let visited = with_route(world, |route| route.foreach_segment(|_, _, _| true));
    assert_eq!(visited.expect("segments"), 1);
}

#[then("the route segments are refused")]
fn segments_refused(world: &SupportWorld) {
    let mut called = false;
    let outcome = with_route(world, |route| {
        route.foreach_segment(|_, _, _| {
            called = true;
            true
        })
    });
    assert!(matches!(outcome, Err(MapsError::NotSupported { .. })));
    assert!(!called);
}

fn maneuver_access(world: &SupportWorld, index: usize) -> Result<usize, MapsError> {
    let mut outcome = None;
    with_route(world, |route| {
        route.foreach_segment(|i, _, segment| {
            if i == index {
                outcome = Some(segment.foreach_maneuver(|_, _, _| true));
                false
            } else {
                true
            }
        })
    })
    .expect("segments");
    outcome.expect("segment index should exist")
}

#[then("segment {index} refuses maneuvers")]
fn segment_refuses(world: &SupportWorld, index: usize) {
    assert!(matches!(
        maneuver_access(world, index),
        Err(MapsError::NotSupported { .. })
    ));
}

#[then("segment {index} exposes maneuvers")]
fn segment_exposes(world: &SupportWorld, index: usize) {
    assert_eq!(maneuver_access(world, index).expect("maneuvers"), 1);
}

#[scenario(path = "tests/features/supported_data.feature", index = 0)]
fn undeclared_routes(world: SupportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/supported_data.feature", index = 1)]
fn route_path_only(world: SupportWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/supported_data.feature", index = 2)]
fn one_time_propagation(world: SupportWorld) {
    let _ = world;
}
