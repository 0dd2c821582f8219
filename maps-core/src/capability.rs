//! Boundary check for the platform maps feature.
//!
//! The platform decides whether the maps service is available at all. That
//! decision is consulted once, when a [`Capability`] is acquired, and every
//! root constructor demands the resulting token.

use log::warn;

use crate::{MapsError, Result};

/// Reports whether the platform permits use of the maps service.
///
/// # Examples
/// ```
/// use maps_core::{Capability, FeatureGate};
///
/// struct Disabled;
///
/// impl FeatureGate for Disabled {
///     fn is_maps_supported(&self) -> bool {
///         false
///     }
/// }
///
/// assert!(Capability::acquire(&Disabled).is_err());
/// ```
pub trait FeatureGate {
    /// Return `true` when the maps feature is available to the caller.
    fn is_maps_supported(&self) -> bool;
}

/// Gate with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticGate(pub bool);

impl FeatureGate for StaticGate {
    fn is_maps_supported(&self) -> bool {
        self.0
    }
}

/// Proof that the feature gate was open.
///
/// The token is zero-sized and `Copy`. It can only be obtained through
/// [`Capability::acquire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    _private: (),
}

impl Capability {
    /// Consult `gate` and return a token when it is open.
    ///
    /// # Errors
    /// Returns [`MapsError::NotSupported`] when the gate is closed.
    ///
    /// # Examples
    /// ```
    /// use maps_core::{Capability, StaticGate};
    ///
    /// let cap = Capability::acquire(&StaticGate(true))?;
    /// # let _ = cap;
    /// # Ok::<(), maps_core::MapsError>(())
    /// ```
    pub fn acquire<G>(gate: &G) -> Result<Self>
    where
        G: FeatureGate + ?Sized,
    {
        if gate.is_maps_supported() {
            Ok(Self { _private: () })
        } else {
            warn!("maps feature gate is closed; refusing to hand out a capability");
            Err(MapsError::NotSupported {
                what: "maps service",
            })
        }
    }

    /// Token for values derived from entities that already exist.
    pub(crate) const fn held() -> Self {
        Self { _private: () }
    }
}
