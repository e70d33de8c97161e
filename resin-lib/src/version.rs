//! OS version ordering.
//!
//! Host OS versions follow semver, with two vendor extensions carried in the
//! build metadata: a revision counter (`+rev3`) and a development marker
//! (`+dev`, `-dev`). Older releases attach the revision directly to the
//! version core (`2.0.6.rev1`), which is rewritten into build metadata
//! before parsing.
//!
//! ```
//! use resin_lib::version::sort_descending;
//!
//! let sorted = sort_descending(vec!["2.0.6.rev1", "2.0.6+rev3", "2.0.7.dev", "2.0.7"]).unwrap();
//! assert_eq!(sorted, ["2.0.7", "2.0.7.dev", "2.0.6+rev3", "2.0.6.rev1"]);
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use semver::Version;

use crate::error::VersionError;

static LEGACY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.[0-9]+)\.(rev|dev)").expect("valid legacy suffix pattern"));

static REVISION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rev(\d+)").expect("valid revision pattern"));

static DEVELOPMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.|\+|-)dev").expect("valid development pattern"));

/// A parsed OS version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsVersion {
    normalized: String,
    version: Version,
    revision: u64,
    development: bool,
}

impl OsVersion {
    /// Parses a version string, accepting the legacy `X.Y.Z.rev` form.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let normalized = normalize(version).into_owned();
        let parsed = Version::parse(&normalized).map_err(|source| VersionError::Invalid {
            version: normalized.clone(),
            source,
        })?;
        Ok(Self {
            revision: revision(&parsed),
            development: is_development_version(&normalized),
            version: parsed,
            normalized,
        })
    }

    /// Returns the normalized version string.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns the parsed semver version.
    pub fn semver(&self) -> &Version {
        &self.version
    }

    /// Returns the revision from the build metadata, or `0` if there is none.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` for development builds.
    pub fn is_development(&self) -> bool {
        self.development
    }

    /// Orders newest first.
    ///
    /// Semver precedence decides first (build metadata ignored), then the
    /// higher revision, then a release before a development build, then the
    /// normalized strings.
    pub fn compare_descending(&self, other: &Self) -> Ordering {
        let by_precedence = precedence(&other.version, &self.version);
        if by_precedence != Ordering::Equal {
            return by_precedence;
        }

        trace!(
            "{} and {} have equal precedence, comparing revisions",
            self.normalized, other.normalized
        );
        other
            .revision
            .cmp(&self.revision)
            .then_with(|| self.development.cmp(&other.development))
            .then_with(|| self.normalized.cmp(&other.normalized))
    }
}

/// Rewrites the legacy `X.Y.Z.rev` form into `X.Y.Z+rev`.
///
/// Only the part before any existing build metadata is rewritten; other
/// inputs are returned unchanged.
pub fn normalize(version: &str) -> Cow<'_, str> {
    let (core, build) = match version.find('+') {
        Some(index) => version.split_at(index),
        None => (version, ""),
    };
    match LEGACY_SUFFIX.replace(core, "${1}+${2}") {
        Cow::Borrowed(_) => Cow::Borrowed(version),
        Cow::Owned(rewritten) if build.is_empty() => Cow::Owned(rewritten),
        Cow::Owned(rewritten) => Cow::Owned(format!("{}.{}", rewritten, &build[1..])),
    }
}

/// Compares two version strings so that sorting yields newest first.
///
/// Fails if either string is not valid semver after normalization.
pub fn compare_descending(a: &str, b: &str) -> Result<Ordering, VersionError> {
    Ok(OsVersion::parse(a)?.compare_descending(&OsVersion::parse(b)?))
}

/// Sorts version strings newest first.
///
/// Every entry is parsed before sorting, so an invalid entry is reported
/// instead of producing an arbitrary order.
pub fn sort_descending<S: AsRef<str>>(versions: Vec<S>) -> Result<Vec<S>, VersionError> {
    let mut parsed = versions
        .into_iter()
        .map(|version| Ok((OsVersion::parse(version.as_ref())?, version)))
        .collect::<Result<Vec<_>, VersionError>>()?;
    parsed.sort_by(|(a, _), (b, _)| a.compare_descending(b));
    Ok(parsed.into_iter().map(|(_, version)| version).collect())
}

/// Returns `true` if the version carries a `dev` marker after `.`, `+` or `-`.
pub fn is_development_version(version: &str) -> bool {
    DEVELOPMENT.is_match(version)
}

fn precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch)
        .cmp(&(b.major, b.minor, b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

/// Revisions too large for `u64` saturate, so they still sort as newest.
fn revision(version: &Version) -> u64 {
    version
        .build
        .as_str()
        .split('.')
        .find_map(|part| REVISION.captures(part))
        .map(|captures| captures[1].parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}
