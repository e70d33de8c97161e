//! Re-typing of generic request failures into domain errors.
//!
//! ```
//! use resin_lib::error::RequestError;
//! use resin_lib::error::or_missing_device;
//!
//! let result: Result<(), _> = Err(RequestError::not_found("Not Found"));
//! let err = result.map_err(or_missing_device("7cf02a6")).unwrap_err();
//! assert_eq!(err.to_string(), "Device not found: 7cf02a6");
//! ```

use log::debug;

use super::RequestError;
use super::SdkError;
use crate::model::NameOrId;
use crate::model::UuidOrId;

/// Replaces any request failure with [`SdkError::ApplicationNotFound`].
///
/// The original failure becomes the error source and its backtrace is
/// carried over.
pub fn treat_as_missing_application(
    name_or_id: impl Into<NameOrId>,
) -> impl FnOnce(RequestError) -> SdkError {
    let name_or_id = name_or_id.into();
    move |err| {
        debug!("Treating {} as missing application {}", err, name_or_id);
        SdkError::ApplicationNotFound {
            trace: err.shared_trace(),
            name_or_id,
            source: err,
        }
    }
}

/// Replaces any request failure with [`SdkError::DeviceNotFound`].
pub fn treat_as_missing_device(
    uuid_or_id: impl Into<UuidOrId>,
) -> impl FnOnce(RequestError) -> SdkError {
    let uuid_or_id = uuid_or_id.into();
    move |err| {
        debug!("Treating {} as missing device {}", err, uuid_or_id);
        SdkError::DeviceNotFound {
            trace: err.shared_trace(),
            uuid_or_id,
            source: err,
        }
    }
}

/// Maps "not found" responses to a missing application, passing everything
/// else through as [`SdkError::Request`].
pub fn or_missing_application(
    name_or_id: impl Into<NameOrId>,
) -> impl FnOnce(RequestError) -> SdkError {
    let name_or_id = name_or_id.into();
    move |err| {
        if err.is_not_found() {
            treat_as_missing_application(name_or_id)(err)
        } else {
            SdkError::Request(err)
        }
    }
}

/// Maps "not found" responses to a missing device, passing everything else
/// through as [`SdkError::Request`].
pub fn or_missing_device(uuid_or_id: impl Into<UuidOrId>) -> impl FnOnce(RequestError) -> SdkError {
    let uuid_or_id = uuid_or_id.into();
    move |err| {
        if err.is_not_found() {
            treat_as_missing_device(uuid_or_id)(err)
        } else {
            SdkError::Request(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_missing_application_keeps_source_and_trace() {
        let original = RequestError::not_found("Not Found");
        let original_trace = original.shared_trace();

        let err = treat_as_missing_application("myapp")(original);
        match &err {
            SdkError::ApplicationNotFound {
                name_or_id,
                source,
                trace,
            } => {
                assert_eq!(name_or_id, &NameOrId::Name("myapp".to_string()));
                assert_eq!(source.status_code, 404);
                assert!(Arc::ptr_eq(trace, &original_trace));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "Application not found: myapp");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_missing_device_by_id() {
        let err = treat_as_missing_device(42u64)(RequestError::not_found("Not Found"));
        assert!(matches!(
            err,
            SdkError::DeviceNotFound {
                uuid_or_id: UuidOrId::Id(42),
                ..
            }
        ));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_treat_as_missing_replaces_any_failure() {
        let err = treat_as_missing_device("abc")(RequestError::http(500, "boom"));
        assert!(matches!(err, SdkError::DeviceNotFound { .. }));
    }

    #[test]
    fn test_or_missing_passes_through_other_failures() {
        let err = or_missing_application(5u64)(RequestError::http(500, "boom"));
        match err {
            SdkError::Request(inner) => assert_eq!(inner.status_code, 500),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = or_missing_device("abc")(RequestError::not_found("Not Found"));
        assert!(matches!(err, SdkError::DeviceNotFound { .. }));
    }
}
