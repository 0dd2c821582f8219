//! Helpers shared by unit and behaviour tests across the workspace.

use crate::{Capability, Coordinates, ItemList, MapsError, StaticGate};

/// Capability obtained from an always-open gate.
///
/// # Errors
/// Never fails; the signature mirrors [`Capability::acquire`].
pub fn open_capability() -> Result<Capability, MapsError> {
    Capability::acquire(&StaticGate(true))
}

/// Build coordinates from `(latitude, longitude)` pairs.
///
/// # Errors
/// Returns the first validation error.
pub fn coordinates(points: &[(f64, f64)]) -> Result<Vec<Coordinates>, MapsError> {
    let cap = open_capability()?;
    points
        .iter()
        .map(|&(lat, lon)| Coordinates::new(cap, lat, lon))
        .collect()
}

/// Build a path list from `(latitude, longitude)` pairs.
///
/// # Errors
/// Returns the first validation or allocation error.
pub fn path(points: &[(f64, f64)]) -> Result<ItemList<Coordinates>, MapsError> {
    ItemList::try_from_slice(&coordinates(points)?)
}
