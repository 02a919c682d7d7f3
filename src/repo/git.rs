use crate::error::NextTagError;
use crate::repo::Vcs;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Env var naming the git executable to run instead of the one found on `PATH`.
pub const GIT_ENV: &str = "NEXTTAG_GIT";

/// `Vcs` backed by the `git` command line.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        GitCli {
            program: program.into(),
        }
    }

    /// Resolves the git program:
    /// 1. NEXTTAG_GIT env var
    /// 2. `git` found on PATH
    /// 3. bare `git`, leaving the failure to the first invocation
    pub fn from_env() -> Self {
        if let Ok(p) = std::env::var(GIT_ENV) {
            if !p.trim().is_empty() {
                return GitCli::new(p);
            }
        }

        match which::which("git") {
            Ok(found) => GitCli::new(found),
            Err(_) => GitCli::new("git"),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run<I, S>(&self, repo: &Path, args: I) -> Result<Output, NextTagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Command::new(&self.program)
            .arg("-C")
            .arg(repo)
            .args(args)
            .output()
            .map_err(|source| NextTagError::ToolUnavailable {
                program: self.program.display().to_string(),
                source,
            })
    }
}

impl Vcs for GitCli {
    fn verify_work_tree(&self, path: &Path) -> Result<(), NextTagError> {
        let out = self.run(path, ["rev-parse", "--is-inside-work-tree"])?;
        if out.status.success() && String::from_utf8_lossy(&out.stdout).trim() == "true" {
            Ok(())
        } else {
            Err(NextTagError::NotARepository(path.to_path_buf()))
        }
    }

    fn list_tags(&self, path: &Path) -> Result<Vec<String>, NextTagError> {
        let out = self.run(path, ["tag", "--list"])?;
        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            let message = match stderr.trim() {
                "" => format!("git exited with {}", out.status),
                msg => msg.to_string(),
            };
            return Err(NextTagError::Enumeration {
                path: path.to_path_buf(),
                message,
            });
        }

        Ok(String::from_utf8_lossy(&out.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}
