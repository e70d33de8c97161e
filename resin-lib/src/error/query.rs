//! Query option error types

/// Errors raised while building or merging query options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A top-level option key outside the recognized set.
    #[error("Unknown pine option: {0}")]
    UnknownOption(String),

    /// Keys other than `$select`/`$expand` inside an expand entry.
    #[error("Unknown pine expand options: {}", .0.join(","))]
    UnknownExpandOption(Vec<String>),

    /// A recognized option carrying a value of the wrong shape.
    #[error("Invalid pine option `{option}`: {message}")]
    InvalidOption {
        /// The option that failed to parse.
        option: String,
        /// Description of the problem.
        message: String,
    },
}

impl QueryError {
    /// Creates a new invalid option error.
    pub fn invalid(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }

    /// Returns the offending option keys.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::UnknownOption(key) => vec![key.as_str()],
            Self::UnknownExpandOption(keys) => keys.iter().map(String::as_str).collect(),
            Self::InvalidOption { option, .. } => vec![option.as_str()],
        }
    }
}
