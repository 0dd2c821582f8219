//! Service configuration backing the platform feature gate.
//!
//! The platform exposes two features and a privilege list. The maps service
//! is usable only when the maps and internet features are both present and
//! the map-service privilege has been granted.

#[cfg(feature = "serde")]
use thiserror::Error;

use crate::FeatureGate;

/// Privilege required to use the maps service.
pub const MAPSERVICE_PRIVILEGE: &str = "http://tizen.org/privilege/mapservice";

/// Platform features and privileges visible to the maps service.
///
/// # Examples
/// ```
/// use maps_core::{Capability, ServiceConfig};
///
/// let config = ServiceConfig::default();
/// assert!(Capability::acquire(&config).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServiceConfig {
    /// Whether the platform advertises the maps feature.
    pub maps_feature: bool,
    /// Whether the platform advertises network access.
    pub internet_feature: bool,
    /// Privileges granted to the calling application.
    pub granted_privileges: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            maps_feature: true,
            internet_feature: true,
            granted_privileges: vec![MAPSERVICE_PRIVILEGE.to_owned()],
        }
    }
}

impl ServiceConfig {
    /// Return `true` when `privilege` has been granted.
    #[must_use]
    pub fn has_privilege(&self, privilege: &str) -> bool {
        self.granted_privileges.iter().any(|p| p == privilege)
    }
}

impl FeatureGate for ServiceConfig {
    fn is_maps_supported(&self) -> bool {
        self.maps_feature && self.internet_feature && self.has_privilege(MAPSERVICE_PRIVILEGE)
    }
}

/// Errors raised while loading a [`ServiceConfig`].
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be decoded.
    #[error("failed to parse service configuration: {0}")]
    Parse(#[source] serde_json::Error),
}

#[cfg(feature = "serde")]
impl ServiceConfig {
    /// Decode a configuration from JSON. Absent fields keep their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the input is not a valid document.
    ///
    /// # Examples
    /// ```
    /// use maps_core::ServiceConfig;
    ///
    /// let config = ServiceConfig::from_json_str(r#"{"internet_feature": false}"#)?;
    /// assert!(config.maps_feature);
    /// assert!(!config.internet_feature);
    /// # Ok::<(), maps_core::ConfigError>(())
    /// ```
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(input).map_err(ConfigError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_config_opens_gate() {
        assert!(ServiceConfig::default().is_maps_supported());
    }

    #[rstest]
    #[case(false, true, true)]
    #[case(true, false, true)]
    #[case(true, true, false)]
    fn any_missing_requirement_closes_gate(
        #[case] maps_feature: bool,
        #[case] internet_feature: bool,
        #[case] privileged: bool,
    ) {
        let config = ServiceConfig {
            maps_feature,
            internet_feature,
            granted_privileges: if privileged {
                vec![MAPSERVICE_PRIVILEGE.to_owned()]
            } else {
                Vec::new()
            },
        };
        assert!(!config.is_maps_supported());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn empty_document_uses_defaults() {
        let config = ServiceConfig::from_json_str("{}").expect("valid json");
        assert_eq!(config, ServiceConfig::default());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn privileges_are_read_from_json() {
        let config = ServiceConfig::from_json_str(r#"{"granted_privileges": []}"#)
            .expect("valid json");
        assert!(!config.is_maps_supported());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn malformed_document_is_rejected() {
        let err = ServiceConfig::from_json_str("{").expect_err("truncated json");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
