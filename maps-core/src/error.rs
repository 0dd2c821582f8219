//! Error taxonomy shared by every entity in the data model.
//!
//! Operations return [`MapsError`]. Callers sitting at an integer boundary
//! convert results into a [`Status`] code, where `0` denotes success.

use thiserror::Error;

/// Errors returned by data-model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapsError {
    /// Input was out of range or malformed, or addressed the wrong variant
    /// of a tagged value.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the rejected input.
        reason: &'static str,
    },
    /// An allocation failed. The operation had no side effect.
    #[error("out of memory")]
    OutOfMemory,
    /// The service feature gate is closed, or the entity declared the
    /// requested data kind absent.
    #[error("{what} is not supported")]
    NotSupported {
        /// The refused feature or data kind.
        what: &'static str,
    },
    /// An optional field was never set, or a lookup found nothing.
    #[error("{what} not found")]
    NotFound {
        /// The missing field or entry.
        what: &'static str,
    },
    /// The operation is not meaningful for the current state of the value.
    #[error("invalid operation: {reason}")]
    InvalidOperation {
        /// Why the operation was refused.
        reason: &'static str,
    },
}

impl MapsError {
    /// Integer status code for this error.
    ///
    /// # Examples
    /// ```
    /// use maps_core::{MapsError, Status};
    ///
    /// let err = MapsError::NotFound { what: "origin" };
    /// assert_eq!(err.status(), Status::NotFound);
    /// ```
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::InvalidParameter { .. } => Status::InvalidParameter,
            Self::OutOfMemory => Status::OutOfMemory,
            Self::NotSupported { .. } => Status::NotSupported,
            Self::NotFound { .. } => Status::NotFound,
            Self::InvalidOperation { .. } => Status::InvalidOperation,
        }
    }
}

/// Closed set of status codes exposed at an integer boundary.
///
/// Values follow errno conventions. `NotSupported` sits in the platform
/// range. `NotFound` is the maps-service base `-0x02C2_0000` with its low
/// bits set to `0x05`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    /// Success.
    None = 0,
    /// Allocation failure.
    OutOfMemory = -12,
    /// Malformed or out-of-range input.
    InvalidParameter = -22,
    /// Operation not meaningful for the current state.
    InvalidOperation = -38,
    /// Field or entry absent.
    NotFound = -0x02C1_FFFB,
    /// Feature gate closed or data kind declared absent.
    NotSupported = -0x3FFF_FFFE,
}

impl Status {
    /// Raw integer value.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl<T> From<&Result<T, MapsError>> for Status {
    fn from(result: &Result<T, MapsError>) -> Self {
        match result {
            Ok(_) => Self::None,
            Err(err) => err.status(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type Result<T, E = MapsError> = std::result::Result<T, E>;
