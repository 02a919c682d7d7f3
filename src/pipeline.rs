use crate::error::NextTagError;
use crate::repo::{Vcs, access::check_path_exists};
use crate::types::version::VersionTriple;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::spinner;
use crate::version::{
    calculate::{Request, next_version},
    select::{parse_tags, select_latest},
};
use serde::Serialize;
use std::path::Path;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub latest: VersionTriple,
    pub next: VersionTriple,
    pub tags_found: usize,
}

/// Computes the next release tag of the repository at `path`.
///
/// ### Parameters
/// - `vcs`: Repository backend used to verify the path and read tags.
/// - `path`: The repository location.
/// - `request`: The major/minor line to release on.
/// - `logger`: Where progress is reported.
///
/// Each step only runs once the previous one succeeded: path check, work-tree
/// check, tag listing, selection, validation.
pub fn compute(
    vcs: &dyn Vcs,
    path: &Path,
    request: Request,
    logger: &Logger,
) -> Result<Outcome, NextTagError> {
    check_path_exists(path)?;
    vcs.verify_work_tree(path)?;
    logger.log_message(
        LogLevel::Debug,
        &format!("{} is a git working tree", path.display()),
    );

    let raw = spinner::run_step(
        logger,
        &format!("Listing tags in {}", path.display()),
        |tags: &Vec<String>| format!("Found {} tag(s)", tags.len()),
        || vcs.list_tags(path),
    )?;

    let tags = parse_tags(&raw);
    let latest = select_latest(&tags);
    if tags.is_empty() {
        logger.log_message(
            LogLevel::Info,
            &format!("No vMAJOR.MINOR.PATCH tags found, starting from {}", latest),
        );
    } else {
        logger.log_message(
            LogLevel::Info,
            &format!("Latest of {} release tag(s): {}", tags.len(), latest),
        );
    }

    let next = next_version(latest, request)?;

    Ok(Outcome {
        latest,
        next,
        tags_found: tags.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VersionError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct FakeVcs {
        is_repo: bool,
        tags: Result<Vec<&'static str>, &'static str>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl FakeVcs {
        fn with_tags(tags: &[&'static str]) -> Self {
            FakeVcs {
                is_repo: true,
                tags: Ok(tags.to_vec()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Vcs for FakeVcs {
        fn verify_work_tree(&self, path: &Path) -> Result<(), NextTagError> {
            self.calls.borrow_mut().push("verify");
            if self.is_repo {
                Ok(())
            } else {
                Err(NextTagError::NotARepository(path.to_path_buf()))
            }
        }

        fn list_tags(&self, path: &Path) -> Result<Vec<String>, NextTagError> {
            self.calls.borrow_mut().push("list");
            match &self.tags {
                Ok(tags) => Ok(tags.iter().map(|t| t.to_string()).collect()),
                Err(msg) => Err(NextTagError::Enumeration {
                    path: path.to_path_buf(),
                    message: msg.to_string(),
                }),
            }
        }
    }

    fn existing_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn computes_from_the_highest_tag() {
        let dir = existing_dir();
        let vcs = FakeVcs::with_tags(&["v1.2.3", "v1.3.0", "v1.2.9", "latest", "v1.4.0-rc1"]);
        let out = compute(&vcs, dir.path(), Request::new(1, 3), &Logger::default()).unwrap();
        assert_eq!(
            out,
            Outcome {
                latest: VersionTriple::new(1, 3, 0),
                next: VersionTriple::new(1, 3, 1),
                tags_found: 3,
            }
        );
        assert_eq!(*vcs.calls.borrow(), vec!["verify", "list"]);
    }

    #[test]
    fn missing_path_stops_before_git_is_touched() {
        let vcs = FakeVcs::with_tags(&["v1.0.0"]);
        let missing = PathBuf::from("/definitely/not/here/nexttag");
        let err = compute(&vcs, &missing, Request::new(1, 0), &Logger::default()).unwrap_err();
        assert!(matches!(err, NextTagError::PathNotFound(_)));
        assert!(vcs.calls.borrow().is_empty());
    }

    #[test]
    fn non_repository_stops_before_listing() {
        let dir = existing_dir();
        let vcs = FakeVcs {
            is_repo: false,
            ..FakeVcs::with_tags(&["v1.0.0"])
        };
        let err = compute(&vcs, dir.path(), Request::new(1, 0), &Logger::default()).unwrap_err();
        assert!(matches!(err, NextTagError::NotARepository(_)));
        assert_eq!(*vcs.calls.borrow(), vec!["verify"]);
    }

    #[test]
    fn listing_failure_is_propagated() {
        let dir = existing_dir();
        let vcs = FakeVcs {
            tags: Err("fatal: bad object"),
            ..FakeVcs::with_tags(&[])
        };
        let err = compute(&vcs, dir.path(), Request::new(1, 0), &Logger::default()).unwrap_err();
        assert!(matches!(err, NextTagError::Enumeration { .. }));
        assert!(err.to_string().contains("fatal: bad object"));
    }

    #[test]
    fn empty_repository_starts_at_baseline() {
        let dir = existing_dir();
        let vcs = FakeVcs::with_tags(&["snapshot", ""]);
        let out = compute(&vcs, dir.path(), Request::new(1, 0), &Logger::default()).unwrap();
        assert_eq!(out.latest, VersionTriple::BASELINE);
        assert_eq!(out.next, VersionTriple::new(1, 0, 0));
        assert_eq!(out.tags_found, 0);
    }

    #[test]
    fn validation_errors_surface_unchanged() {
        let dir = existing_dir();
        let vcs = FakeVcs::with_tags(&["v1.5.2"]);
        let err = compute(&vcs, dir.path(), Request::new(3, 0), &Logger::default()).unwrap_err();
        assert!(matches!(err, NextTagError::Version(VersionError::Skip { .. })));

        let err = compute(&vcs, dir.path(), Request::new(1, 3), &Logger::default()).unwrap_err();
        assert!(matches!(
            err,
            NextTagError::Version(VersionError::Regression { .. })
        ));
    }

    #[test]
    fn outcome_serializes_with_tag_strings() {
        let out = Outcome {
            latest: VersionTriple::new(1, 5, 2),
            next: VersionTriple::new(2, 0, 0),
            tags_found: 1,
        };
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"latest":"v1.5.2","next":"v2.0.0","tags_found":1}"#
        );
    }
}
