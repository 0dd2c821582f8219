//! Metadata describing a map provider plugin.

use crate::bounded::copy_bounded;
use crate::container::Item;
use crate::lifecycle::{Entity, Field, FieldKind, deep_copy, if_present};
use crate::{Capability, MapsError, Result};

/// Longest provider name kept, in bytes.
pub const PROVIDER_NAME_MAX_LEN: usize = 64;

/// Information published by a provider plugin.
///
/// # Examples
/// ```
/// use maps_core::{Capability, PluginInfo, StaticGate};
///
/// let cap = Capability::acquire(&StaticGate(true))?;
/// let mut info = PluginInfo::new(cap);
/// assert!(info.provider_name().is_err());
/// info.set_provider_name("HERE")?;
/// assert_eq!(info.provider_name()?, "HERE");
/// # Ok::<(), maps_core::MapsError>(())
/// ```
///
/// Without a [`Capability`] there is no way to build one:
/// ```compile_fail
/// let info = maps_core::PluginInfo::default();
/// ```
#[derive(Debug, PartialEq)]
pub struct PluginInfo {
    provider_name: Option<String>,
}

impl PluginInfo {
    /// Construct an empty record.
    #[must_use]
    pub const fn new(_cap: Capability) -> Self {
        Self {
            provider_name: None,
        }
    }

    /// Copy of the provider name.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when no name has been set.
    pub fn provider_name(&self) -> Result<String> {
        self.provider_name
            .as_ref()
            .ok_or(MapsError::NotFound {
                what: "provider name",
            })?
            .try_clone()
    }

    /// Store a copy of `name`, truncated to [`PROVIDER_NAME_MAX_LEN`] bytes.
    ///
    /// # Errors
    /// Returns [`MapsError::OutOfMemory`] when the copy cannot be allocated.
    pub fn set_provider_name(&mut self, name: &str) -> Result<()> {
        self.provider_name = Some(copy_bounded("provider name", name, PROVIDER_NAME_MAX_LEN)?);
        Ok(())
    }
}

impl Entity for PluginInfo {
    const NAME: &'static str = "plugin info";
    const FIELDS: &'static [Field<Self>] = &[Field::new(
        "provider_name",
        FieldKind::Primitive,
        |src, dst| {
            if let Some(name) = if_present(src.provider_name())? {
                dst.set_provider_name(&name)?;
            }
            Ok(())
        },
    )];

    fn blank(cap: Capability) -> Self {
        Self::new(cap)
    }
}

impl Item for PluginInfo {
    fn try_clone(&self) -> Result<Self> {
        deep_copy(self)
    }
}
