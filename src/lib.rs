//! Facade crate for the maps service data model.
//!
//! This crate re-exports the core entities and containers, and exposes the
//! route and view-event layers behind feature flags.

#![forbid(unsafe_code)]

pub use maps_core::{
    Area, AreaKind, Capability, Coordinates, FeatureGate, IntTable, Item, ItemList, KeyedTable,
    MAPSERVICE_PRIVILEGE, MapsError, PluginInfo, Result, ServiceConfig, ServiceData, StaticGate,
    Status, StringTable, SupportedData, is_data_supported,
};

#[cfg(feature = "serde")]
pub use maps_core::ConfigError;

#[cfg(feature = "route")]
pub use maps_route::{
    DirectionId, DistanceUnit, Route, RouteManeuver, RouteSegment, TransportMode, TurnType,
};

#[cfg(feature = "view")]
pub use maps_view::{ActionType, EventKind, GestureType, ScreenPoint, ViewEvent};
