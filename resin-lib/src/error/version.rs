//! Version error types

/// Errors that can occur while comparing version strings.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// The version is not valid semver, even after normalization.
    #[error("Invalid version `{version}`: {source}")]
    Invalid {
        /// The normalized version string.
        version: String,
        /// The underlying parse failure.
        source: semver::Error,
    },
}

impl VersionError {
    /// Returns the version string that failed to parse.
    pub fn version(&self) -> &str {
        match self {
            Self::Invalid { version, .. } => version,
        }
    }
}
