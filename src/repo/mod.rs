use crate::error::NextTagError;
use std::path::Path;

pub mod access;
pub mod git;

/// Source-control operations needed to read a repository's release tags.
///
/// The repository location is always passed in; implementations must not rely on
/// the process working directory.
pub trait Vcs {
    /// Fails with `NotARepository` unless `path` lies inside a working tree.
    fn verify_work_tree(&self, path: &Path) -> Result<(), NextTagError>;

    /// Every tag name known to the repository, unfiltered and unsorted.
    fn list_tags(&self, path: &Path) -> Result<Vec<String>, NextTagError>;
}
