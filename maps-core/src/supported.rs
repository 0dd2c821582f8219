//! Declared data capabilities of a provider.
//!
//! A plugin may declare which optional data kinds it actually fills in.
//! Entities keep that declaration as an optional [`SupportedData`] set and
//! gate access to the corresponding fields. An entity without a set imposes
//! no restriction.

use crate::container::{IntTable, Item};
use crate::{Result, closed_enum};

closed_enum! {
    /// Optional data kinds a provider may or may not deliver.
    pub enum ServiceData: "service data" {
        /// Place address.
        PlaceAddress = 0,
        /// Place rating.
        PlaceRating = 1,
        /// Place categories.
        PlaceCategories = 2,
        /// Place attributes.
        PlaceAttributes = 3,
        /// Place contacts.
        PlaceContacts = 4,
        /// Place editorials.
        PlaceEditorials = 5,
        /// Place reviews.
        PlaceReviews = 6,
        /// Place images.
        PlaceImage = 7,
        /// Place supplier link.
        PlaceSupplier = 8,
        /// Related places.
        PlaceRelated = 9,
        /// Route-level path geometry.
        RoutePath = 10,
        /// Segment-level path geometry.
        RouteSegmentsPath = 11,
        /// Segment maneuvers.
        RouteSegmentsManeuvers = 12,
    }
}

/// Set of [`ServiceData`] kinds declared available.
///
/// Stored as an integer table mapping each present kind's code to itself.
///
/// # Examples
/// ```
/// use maps_core::{ServiceData, SupportedData};
///
/// let set = SupportedData::from_kinds(&[ServiceData::RoutePath])?;
/// assert!(set.contains(ServiceData::RoutePath));
/// assert!(!set.contains(ServiceData::RouteSegmentsManeuvers));
/// # Ok::<(), maps_core::MapsError>(())
/// ```
#[derive(Debug, Default, PartialEq)]
pub struct SupportedData {
    kinds: IntTable,
}

impl SupportedData {
    /// Construct an empty set, which supports nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a set from `kinds`.
    ///
    /// # Errors
    /// Returns [`MapsError::OutOfMemory`](crate::MapsError::OutOfMemory) when
    /// the set cannot grow.
    pub fn from_kinds(kinds: &[ServiceData]) -> Result<Self> {
        let mut set = Self::new();
        for kind in kinds {
            set.insert(*kind)?;
        }
        Ok(set)
    }

    /// Declare `kind` available.
    ///
    /// # Errors
    /// Returns [`MapsError::OutOfMemory`](crate::MapsError::OutOfMemory) when
    /// the set cannot grow.
    pub fn insert(&mut self, kind: ServiceData) -> Result<()> {
        let code = kind.code();
        self.kinds.set(&code, &code)
    }

    /// Withdraw `kind`. Returns `true` when it was present.
    pub fn remove(&mut self, kind: ServiceData) -> bool {
        self.kinds.remove(&kind.code()).is_ok()
    }

    /// Return `true` when `kind` is declared available.
    #[must_use]
    pub fn contains(&self, kind: ServiceData) -> bool {
        self.kinds.contains(&kind.code())
    }

    /// Number of declared kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Return `true` when no kind is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Item for SupportedData {
    fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            kinds: self.kinds.try_clone()?,
        })
    }
}

/// Evaluate the gate for an optional declaration.
///
/// An absent declaration means the provider placed no restriction, so every
/// kind is reported supported.
#[must_use]
pub fn is_data_supported(declared: Option<&SupportedData>, kind: ServiceData) -> bool {
    declared.is_none_or(|set| set.contains(kind))
}
