//! Version Comparator
//!
//! Parses client and server version strings into comparable semantic versions.
//! Ordering follows semantic-version precedence: major, minor, patch, then a
//! pre-release tag sorts below the same release without one. Build metadata is
//! accepted and ignored.
//!
//! Unversioned development builds report [`DEFAULT_VERSION`]. That string is
//! never parsed; it compares greater than or equal to every other version so
//! such builds are never told to upgrade.

use crate::error::VersionError;
use std::cmp::Ordering;
use std::fmt;

/// Version reported by builds that were not stamped with a release version.
pub const DEFAULT_VERSION: &str = "0.0.0-unknown-version";

/// A parsed client or server version.
#[derive(Debug, Clone)]
pub enum Version {
    /// The [`DEFAULT_VERSION`] sentinel.
    Unknown,
    Semantic(semver::Version),
}

impl Version {
    /// Strict parse: requires `major.minor.patch`, with optional `-pre` and `+build`.
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        if raw == DEFAULT_VERSION {
            return Ok(Version::Unknown);
        }

        if !has_numeric_core(raw) {
            return Err(VersionError::MissingCore);
        }

        semver::Version::parse(raw)
            .map(Version::Semantic)
            .map_err(|e| VersionError::Invalid {
                raw: raw.to_string(),
                reason: e.to_string(),
            })
    }

    /// Lenient parse for server-reported API versions such as `3.25`.
    ///
    /// Missing minor/patch components are taken as zero and a leading `v` is
    /// dropped. Anything else still has to be a valid semantic version.
    pub fn parse_tolerant(raw: &str) -> Result<Self, VersionError> {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let split_at = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
        let (core, suffix) = trimmed.split_at(split_at);

        let mut parts: Vec<&str> = core.split('.').collect();
        if parts.is_empty() || parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(VersionError::MissingCore);
        }
        while parts.len() < 3 {
            parts.push("0");
        }

        Self::parse(&format!("{}{}", parts.join("."), suffix))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Version::Unknown)
    }
}

/// True when the part before any `-`/`+` suffix is three dot-separated integers.
fn has_numeric_core(raw: &str) -> bool {
    let core = raw.split(['-', '+']).next().unwrap_or("");
    let parts: Vec<&str> = core.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

/// Three-way comparison of two parsed versions.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    match (a, b) {
        (Version::Unknown, Version::Unknown) => Ordering::Equal,
        (Version::Unknown, Version::Semantic(_)) => Ordering::Greater,
        (Version::Semantic(_), Version::Unknown) => Ordering::Less,
        (Version::Semantic(a), Version::Semantic(b)) => a.cmp_precedence(b),
    }
}

/// Feature gate: true when `raw` parses (leniently) and is at least `minimum`.
///
/// Unparsable server versions fail the gate.
pub fn meets_minimum(raw: &str, minimum: &Version) -> bool {
    match Version::parse_tolerant(raw) {
        Ok(v) => compare(&v, minimum) != Ordering::Less,
        Err(e) => {
            tracing::debug!(version = raw, error = %e, "Unparsable version fails feature gate");
            false
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Unknown => f.write_str(DEFAULT_VERSION),
            Version::Semantic(v) => write!(f, "{}", v),
        }
    }
}
