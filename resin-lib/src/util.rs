//! Small helpers shared by the SDK surface.

use crate::error::SdkError;

/// A positional argument of a dual-style (callback or result) call.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument<T, F> {
    /// A plain value.
    Value(T),
    /// A completion callback.
    Callback(F),
}

impl<T, F> Argument<T, F> {
    /// Returns the callback if this argument is one.
    pub fn as_callback(&self) -> Option<&F> {
        match self {
            Argument::Callback(callback) => Some(callback),
            Argument::Value(_) => None,
        }
    }
}

/// Returns the last argument if, and only if, it is a callback.
///
/// # Example
///
/// ```
/// use resin_lib::util::Argument;
/// use resin_lib::util::find_trailing_callback;
///
/// let args: [Argument<i32, fn()>; 3] =
///     [Argument::Value(1), Argument::Value(2), Argument::Callback(|| {})];
/// assert!(find_trailing_callback(&args).is_some());
/// assert!(find_trailing_callback(&args[..2]).is_none());
/// ```
pub fn find_trailing_callback<T, F>(args: &[Argument<T, F>]) -> Option<&F> {
    args.last()?.as_callback()
}

/// Returns `true` if the JSON value is a numeric id rather than a name or uuid.
pub fn is_id(value: &serde_json::Value) -> bool {
    value.is_number()
}

/// Fails with [`SdkError::NotImplemented`].
pub fn not_implemented<T>() -> Result<T, SdkError> {
    Err(SdkError::NotImplemented)
}

/// An SDK entry point that may be disabled for the current environment.
///
/// Built once from a capability flag with [`only_if`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guarded<F> {
    /// The entry point is available.
    Enabled(F),
    /// The environment lacks the capability.
    Disabled,
}

impl<F> Guarded<F> {
    /// Returns the entry point, or [`SdkError::NotImplemented`] if disabled.
    pub fn get(&self) -> Result<&F, SdkError> {
        match self {
            Guarded::Enabled(f) => Ok(f),
            Guarded::Disabled => not_implemented(),
        }
    }

    /// Returns `true` if the entry point is available.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Guarded::Enabled(_))
    }
}

/// Keeps `f` when `condition` holds, otherwise a stub failing with
/// [`SdkError::NotImplemented`].
pub fn only_if<F>(condition: bool, f: F) -> Guarded<F> {
    if condition {
        Guarded::Enabled(f)
    } else {
        Guarded::Disabled
    }
}
