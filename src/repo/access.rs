use crate::error::NextTagError;
use std::path::Path;

/// Ensures `path` exists on disk before anything asks git about it.
///
/// ### Parameters
/// - `path`: The repository path supplied on the command line.
///
pub fn check_path_exists(path: &Path) -> Result<(), NextTagError> {
    match path.try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => Err(NextTagError::PathNotFound(path.to_path_buf())),
        Err(source) => Err(NextTagError::PathAccess {
            path: path.to_path_buf(),
            source,
        }),
    }
}
