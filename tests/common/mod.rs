#![allow(dead_code)]

use anyhow::{Result, bail};
use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn nexttag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("nexttag").unwrap();
    cmd.env_remove("NEXTTAG_GIT").env_remove("NEXTTAG_CLI_VERSION");
    cmd
}

pub fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Throwaway git repository with a single empty commit.
pub struct TestRepo {
    pub dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Result<Self> {
        let repo = TestRepo {
            dir: tempfile::tempdir()?,
        };
        repo.git(&["init", "-q"])?;
        repo.git(&["commit", "-q", "--allow-empty", "-m", "init"])?;
        Ok(repo)
    }

    pub fn with_tags(tags: &[&str]) -> Result<Self> {
        let repo = Self::new()?;
        for tag in tags {
            repo.git(&["tag", tag])?;
        }
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git(&self, args: &[&str]) -> Result<()> {
        let status = std::process::Command::new("git")
            .arg("-C")
            .arg(self.path())
            .args(["-c", "user.name=nexttag", "-c", "user.email=nexttag@example.com"])
            .args(["-c", "commit.gpgsign=false", "-c", "tag.gpgsign=false"])
            .args(args)
            .status()?;
        if !status.success() {
            bail!("git {:?} failed with {}", args, status);
        }
        Ok(())
    }
}
