//! Top-level SDK error type

use std::backtrace::Backtrace;
use std::sync::Arc;

use super::QueryError;
use super::RequestError;
use super::VersionError;
use crate::model::NameOrId;
use crate::model::UuidOrId;

/// Errors surfaced to callers of the SDK.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The application does not exist or is not visible to the user.
    #[error("Application not found: {name_or_id}")]
    ApplicationNotFound {
        /// Application name or id that was requested.
        name_or_id: NameOrId,
        /// The request failure this error replaces.
        source: RequestError,
        /// Backtrace of the original failure.
        trace: Arc<Backtrace>,
    },

    /// The device does not exist or is not visible to the user.
    #[error("Device not found: {uuid_or_id}")]
    DeviceNotFound {
        /// Device uuid or id that was requested.
        uuid_or_id: UuidOrId,
        /// The request failure this error replaces.
        source: RequestError,
        /// Backtrace of the original failure.
        trace: Arc<Backtrace>,
    },

    /// The method is disabled in the current environment.
    #[error("The method is not implemented.")]
    NotImplemented,

    /// Request layer failure passed through unchanged.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Invalid query options.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Invalid version string.
    #[error(transparent)]
    Version(#[from] VersionError),
}

impl SdkError {
    /// Returns the diagnostic backtrace of the underlying request failure.
    pub fn trace(&self) -> Option<&Backtrace> {
        match self {
            Self::ApplicationNotFound { trace, .. } | Self::DeviceNotFound { trace, .. } => {
                Some(trace.as_ref())
            }
            Self::Request(err) => Some(err.trace()),
            _ => None,
        }
    }

    /// Returns `true` if this is a missing application or device.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::ApplicationNotFound { .. } | Self::DeviceNotFound { .. } => true,
            Self::Request(err) => err.is_not_found(),
            _ => false,
        }
    }
}
