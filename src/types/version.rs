use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v(\d+)\.(\d+)\.(\d+)$").expect("tag pattern is a valid regex")
});

/// A `vMAJOR.MINOR.PATCH` release version.
///
/// Field order matters: the derived `Ord` compares major, then minor, then patch,
/// each numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    /// Version assumed when a repository carries no release tags yet.
    pub const BASELINE: VersionTriple = VersionTriple::new(0, 0, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionTriple {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a vMAJOR.MINOR.PATCH tag")]
pub struct ParseTagError(pub String);

impl FromStr for VersionTriple {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTagError(s.to_string());
        let caps = TAG_PATTERN.captures(s).ok_or_else(invalid)?;

        // \d+ can still overflow u64, which counts as a non-matching tag
        let component = |i: usize| -> Result<u64, ParseTagError> {
            caps[i].parse::<u64>().map_err(|_| invalid())
        };

        Ok(VersionTriple::new(component(1)?, component(2)?, component(3)?))
    }
}

impl Serialize for VersionTriple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
