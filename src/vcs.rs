//! Version control bootstrap of a freshly generated project.
//! Runs the version control tool as an external process to create a
//! repository holding the generated tree as its first commit.

use crate::constants::{INITIAL_COMMIT_MESSAGE, VCS_PROGRAM};
use crate::error::{Error, Result};
use log::debug;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

/// Trait for capturing a generated tree in version control.
pub trait Bootstrapper {
    /// Initializes a repository at `root` and commits everything in it.
    ///
    /// # Errors
    /// * `Error::VcsError` naming the first step that failed
    fn bootstrap(&self, root: &Path) -> Result<()>;
}

/// One invocation of the version control tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub args: Vec<String>,
}

/// Bootstrapper driving the `git` command-line tool.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    message: String,
    envs: Vec<(OsString, OsString)>,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: OsString::from(VCS_PROGRAM),
            message: INITIAL_COMMIT_MESSAGE.to_string(),
            envs: Vec::new(),
        }
    }

    /// Uses `program` instead of `git` from `PATH`.
    pub fn with_program<S: AsRef<OsStr>>(mut self, program: S) -> Self {
        self.program = program.as_ref().to_os_string();
        self
    }

    /// Sets an environment variable for every invocation.
    pub fn with_env<K: AsRef<OsStr>, V: AsRef<OsStr>>(mut self, key: K, value: V) -> Self {
        self.envs.push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    /// Invocations performed by [`Bootstrapper::bootstrap`], in order.
    pub fn steps(&self) -> Vec<Step> {
        vec![
            Step { name: "init", args: vec!["init".to_string()] },
            Step { name: "add", args: vec!["add".to_string(), ".".to_string()] },
            Step {
                name: "commit",
                args: vec!["commit".to_string(), "-m".to_string(), self.message.clone()],
            },
        ]
    }

    fn run_step(&self, root: &Path, step: &Step) -> Result<()> {
        debug!("Running {} {} in {}", self.program.to_string_lossy(), step.args.join(" "), root.display());

        let output = Command::new(&self.program)
            .args(&step.args)
            .current_dir(root)
            .envs(self.envs.iter().map(|(key, value)| (key, value)))
            .output()
            .map_err(|e| Error::VcsError { step: step.name.to_string(), reason: e.to_string() })?;

        if !output.status.success() {
            return Err(Error::VcsError {
                step: step.name.to_string(),
                reason: format!(
                    "{} ({})",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        debug!("{}", String::from_utf8_lossy(&output.stdout).trim());
        Ok(())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        GitCli::new()
    }
}

impl Bootstrapper for GitCli {
    fn bootstrap(&self, root: &Path) -> Result<()> {
        for step in self.steps() {
            self.run_step(root, &step)?;
        }
        Ok(())
    }
}
