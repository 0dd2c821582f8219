#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural coverage for the platform feature gate.

use std::cell::RefCell;

use maps_core::{Capability, MapsError, ServiceConfig};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Scenario state shared between steps.
#[derive(Debug, Default)]
struct GateWorld {
    config: RefCell<Option<ServiceConfig>>,
    outcome: RefCell<Option<Result<Capability, MapsError>>>,
}

#[fixture]
fn world() -> GateWorld {
    GateWorld::default()
}

#[given("a service configuration without the internet feature")]
fn without_internet(world: &GateWorld) {
    let config = ServiceConfig::from_json_str(r#"{"internet_feature": false}"#)
        .expect("valid configuration");
    world.config.replace(Some(config));
}

#[given("the default service configuration")]
fn default_config(world: &GateWorld) {
    world.config.replace(Some(ServiceConfig::default()));
}

#[when("I request a maps capability")]
fn request(world: &GateWorld) {
    let borrowed = world.config.borrow();
    let config = borrowed.as_ref().expect("configuration should be loaded");
    world.outcome.replace(Some(Capability::acquire(config)));
}

#[then("the request is refused as not supported")]
fn refused(world: &GateWorld) {
    let borrowed = world.outcome.borrow();
    match borrowed.as_ref().expect("outcome should be recorded") {
        Err(MapsError::NotSupported { .. }) => {}
        other => panic!("expected NotSupported, got {other:?}"),
    }
}

#[then("a capability is granted")]
fn granted(world: &GateWorld) {
    let borrowed = world.outcome.borrow();
    assert!(matches!(borrowed.as_ref(), Some(Ok(_))));
}

#[scenario(path = "tests/features/feature_gate.feature", index = 0)]
fn closed_gate_refuses(world: GateWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/feature_gate.feature", index = 1)]
fn default_gate_grants(world: GateWorld) {
    let _ = world;
}
