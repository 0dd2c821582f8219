//! Core data model for the maps service.
//!
//! Every entity follows one lifecycle: a constructor produces a blank value,
//! setters validate and deep-copy their input, getters hand out copies, and
//! `Drop` releases everything the entity owns. Composite entities clone by
//! replaying their setters (see [`lifecycle`]).
//!
//! Root constructors demand a [`Capability`], which is only handed out when
//! the platform [`FeatureGate`] is open.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod macros;

pub mod area;
pub mod bounded;
pub mod capability;
pub mod config;
pub mod container;
pub mod coordinates;
pub mod error;
pub mod lifecycle;
pub mod plugin_info;
pub mod supported;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use area::{Area, AreaKind};
pub use capability::{Capability, FeatureGate, StaticGate};
#[cfg(feature = "serde")]
pub use config::ConfigError;
pub use config::{MAPSERVICE_PRIVILEGE, ServiceConfig};
pub use container::{IntTable, Item, ItemList, KeyedTable, StringTable, TableKey};
pub use coordinates::Coordinates;
pub use error::{MapsError, Result, Status};
pub use lifecycle::{Entity, Field, FieldKind};
pub use plugin_info::PluginInfo;
pub use supported::{ServiceData, SupportedData, is_data_supported};
