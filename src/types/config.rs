use crate::error::NextTagError;
use crate::version::calculate::Request;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare `vX.Y.Z`.
    #[default]
    Plain,
    Json,
}

/// Run settings gathered from the command line. Absent values stay `None`
/// until [`Config::resolve`] checks them.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub path: Option<PathBuf>,
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub output: OutputFormat,
    pub verbose: bool,
}

/// A fully specified run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub path: PathBuf,
    pub request: Request,
}

impl Config {
    /// Ensures path, major and minor were all supplied.
    pub fn resolve(&self) -> Result<Resolved, NextTagError> {
        let path = self
            .path
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(NextTagError::MissingArgument("path"))?;
        let major = self.major.ok_or(NextTagError::MissingArgument("major"))?;
        let minor = self.minor.ok_or(NextTagError::MissingArgument("minor"))?;

        Ok(Resolved {
            path,
            request: Request::new(major, minor),
        })
    }
}
