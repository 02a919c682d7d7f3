use crate::error::{Component, VersionError};
use crate::types::version::VersionTriple;

/// Major/minor line the caller wants to release on. Patch is always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub major: u64,
    pub minor: u64,
}

impl Request {
    pub fn new(major: u64, minor: u64) -> Self {
        Request { major, minor }
    }
}

/// Computes the version that follows `latest` on the requested line.
///
/// ### Parameters
/// - `latest`: The highest existing release tag.
/// - `request`: The major/minor pair to release.
///
/// Same line bumps the patch, the next minor starts at `.0`, the next major
/// must start at `X.0.0`. Anything lower is a regression, anything further a skip.
pub fn next_version(latest: VersionTriple, request: Request) -> Result<VersionTriple, VersionError> {
    let Request { major, minor } = request;
    let skip = |component| VersionError::Skip {
        component,
        latest,
        major,
        minor,
    };

    if major < latest.major {
        return Err(VersionError::Regression {
            component: Component::Major,
            latest: latest.major,
            requested: major,
        });
    }

    if major == latest.major {
        if minor < latest.minor {
            return Err(VersionError::Regression {
                component: Component::Minor,
                latest: latest.minor,
                requested: minor,
            });
        }
        if minor == latest.minor {
            let patch = latest
                .patch
                .checked_add(1)
                .ok_or(VersionError::Overflow { latest })?;
            return Ok(VersionTriple::new(major, minor, patch));
        }
        if latest.minor.checked_add(1) == Some(minor) {
            return Ok(VersionTriple::new(major, minor, 0));
        }
        return Err(skip(Component::Minor));
    }

    // new major lines always open at minor 0
    if latest.major.checked_add(1) == Some(major) && minor == 0 {
        return Ok(VersionTriple::new(major, 0, 0));
    }

    Err(skip(Component::Major))
}
