//! Version strings as published in the release feeds
//!
//! The feeds use a loose semantic-version dialect:
//! `major.minor[.patch][.ignored][-prerelease][+buildmetadata]`.
//! The patch number is optional and defaults to 0, and some releases carry
//! a fourth numeric segment that is accepted and discarded.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::release::error::ReleaseError;

/// Semver's suggested pattern, relaxed to allow an optional patch and a
/// trailing fourth numeric segment.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<major>0|[1-9][0-9]*)
        \.
        (?P<minor>0|[1-9][0-9]*)
        (?:\.(?P<patch>0|[1-9][0-9]*))?
        (?:\.(?:0|[1-9][0-9]*))?
        (?:-(?P<prerelease>
            (?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)
            (?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*
        ))?
        (?:\+(?P<buildmetadata>
            [0-9a-zA-Z-]+
            (?:\.[0-9a-zA-Z-]+)*
        ))?
        $",
    )
    .expect("version pattern is valid")
});

/// Pre-release label used by nightly builds in the Maven snapshot repositories
const SNAPSHOT_LABEL: &str = "SNAPSHOT";

/// A parsed release version. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build_metadata: Option<String>,
    stable: bool,
    raw: String,
}

impl Version {
    /// Parses a version string, failing with `InvalidVersionFormat` unless
    /// the whole input matches the grammar.
    pub fn parse(version: &str) -> Result<Self, ReleaseError> {
        let invalid = || ReleaseError::InvalidVersionFormat(version.to_string());

        let caps = VERSION_PATTERN.captures(version).ok_or_else(invalid)?;

        let number = |name: &str| -> Result<u64, ReleaseError> {
            match caps.name(name) {
                Some(m) => m.as_str().parse().map_err(|_| invalid()),
                None => Ok(0),
            }
        };

        let major = number("major")?;
        let minor = number("minor")?;
        let patch = number("patch")?;
        let pre_release = caps.name("prerelease").map(|m| m.as_str().to_string());
        let build_metadata = caps.name("buildmetadata").map(|m| m.as_str().to_string());
        let stable = pre_release.is_none() && build_metadata.is_none();

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
            stable,
            raw: version.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch number, 0 when the version string omits it
    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// True iff the version has neither a pre-release nor a build-metadata suffix
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// True for nightly builds such as `5.0.4-SNAPSHOT`
    pub fn is_snapshot(&self) -> bool {
        self.pre_release.as_deref() == Some(SNAPSHOT_LABEL)
    }

    /// The version exactly as it appeared in the source
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
