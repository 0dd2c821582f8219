//! Routes, route segments and maneuvers.
//!
//! These composite entities own their geometry, nested entities and
//! property tables exclusively. They clone by replaying their setters through
//! [`maps_core::lifecycle`]. Optional data is gated by each entity's
//! declared [`SupportedData`](maps_core::SupportedData).

#![forbid(unsafe_code)]

mod kinds;
mod maneuver;
mod route;
mod segment;

pub use kinds::{DirectionId, DistanceUnit, TransportMode, TurnType};
pub use maneuver::{INSTRUCTION_TEXT_MAX_LEN, LOCALE_MAX_LEN, ROAD_NAME_MAX_LEN, RouteManeuver};
pub use route::{ROUTE_ID_MAX_LEN, Route};
pub use segment::RouteSegment;

use maps_core::{MapsError, Result};

fn non_negative_distance(distance: f64) -> Result<f64> {
    if distance.is_finite() && distance >= 0.0 {
        Ok(distance)
    } else {
        Err(MapsError::InvalidParameter {
            reason: "distance must be a non-negative number",
        })
    }
}

fn non_negative_duration(duration: i64) -> Result<i64> {
    if duration >= 0 {
        Ok(duration)
    } else {
        Err(MapsError::InvalidParameter {
            reason: "duration must not be negative",
        })
    }
}
