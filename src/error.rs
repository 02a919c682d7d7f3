use crate::types::version::VersionTriple;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Version tier named in a progression error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => f.write_str("major"),
            Component::Minor => f.write_str("minor"),
        }
    }
}

/// Rejections of a requested major/minor against the latest tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Requested component is lower than the latest one.
    #[error(
        "invalid {component} version: requested {component} ({requested}) cannot be less than the latest {component} version ({latest})"
    )]
    Regression {
        component: Component,
        latest: u64,
        requested: u64,
    },

    /// Requested major/minor jumps over an intermediate release line.
    #[error(
        "invalid {component} version: skipping {component} versions is not allowed (latest: {latest}, requested: v{major}.{minor}.x)"
    )]
    Skip {
        component: Component,
        latest: VersionTriple,
        major: u64,
        minor: u64,
    },

    #[error("cannot bump patch of {latest}: patch number out of range")]
    Overflow { latest: VersionTriple },
}

#[cfg(test)]
impl VersionError {
    pub fn is_regression(&self) -> bool {
        matches!(self, VersionError::Regression { .. })
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, VersionError::Skip { .. })
    }
}

#[derive(Debug, Error)]
pub enum NextTagError {
    #[error("missing required argument --{0} (all of --path, --major and --minor must be provided)")]
    MissingArgument(&'static str),

    #[error("path {} does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("failed to access path {}", .path.display())]
    PathAccess { path: PathBuf, source: io::Error },

    #[error("path {} is not a Git repository", .0.display())]
    NotARepository(PathBuf),

    #[error("failed to run {program}")]
    ToolUnavailable { program: String, source: io::Error },

    #[error("failed to list tags in {}: {message}", .path.display())]
    Enumeration { path: PathBuf, message: String },

    #[error(transparent)]
    Version(#[from] VersionError),
}
