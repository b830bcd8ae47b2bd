//! Project generation orchestration.
//! Sequences the root guard, the materializer and the version control
//! bootstrap for one target root.

use crate::constants::COMMITTED_MESSAGE;
use crate::error::Result;
use crate::guard::{check_root, RootCheck};
use crate::materializer::{materialize, materialize_staged};
use crate::template::TargetRoot;
use crate::vcs::Bootstrapper;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// How the tree reaches the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Build in a staging directory, then rename into place
    #[default]
    Staged,
    /// Write directly at the target
    InPlace,
}

/// Terminal state of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The tree was generated at `path`
    Created { name: String, path: PathBuf, committed: bool },
    /// Something already existed at the target, nothing was written
    Conflict { name: String },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Created { name, committed, .. } => {
                write!(f, "Project '{name}' has been created with initial structure.")?;
                if *committed {
                    write!(f, "\n{COMMITTED_MESSAGE}")?;
                }
                Ok(())
            }
            Outcome::Conflict { name } => write!(f, "Directory '{name}' already exists."),
        }
    }
}

/// Generates target roots under an output directory.
pub struct Generator<'a> {
    output_dir: PathBuf,
    strategy: Strategy,
    vcs: Option<&'a dyn Bootstrapper>,
}

impl<'a> Generator<'a> {
    /// Creates a generator writing under `output_dir`, staged and without
    /// version control.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self { output_dir: output_dir.as_ref().to_path_buf(), strategy: Strategy::default(), vcs: None }
    }

    /// Selects how the tree reaches the output directory.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Bootstraps version control in every generated root.
    pub fn vcs(mut self, vcs: &'a dyn Bootstrapper) -> Self {
        self.vcs = Some(vcs);
        self
    }

    /// Generates and commits `root`, see [`Generator::create`] and
    /// [`Generator::commit`].
    pub fn generate(&self, root: &TargetRoot) -> Result<Outcome> {
        let outcome = self.create(root)?;
        self.commit(outcome)
    }

    /// Writes `root` unless something already exists at its path.
    ///
    /// # Returns
    /// * `Outcome::Conflict` without touching the filesystem if the target exists
    /// * `Outcome::Created`, not yet committed, once the tree is written
    ///
    /// # Errors
    /// * `Error::IoError` if writing the tree fails
    pub fn create(&self, root: &TargetRoot) -> Result<Outcome> {
        let name = root.name().to_string();

        if check_root(&self.output_dir, &name) == RootCheck::Abort {
            return Ok(Outcome::Conflict { name });
        }

        match self.strategy {
            Strategy::Staged => materialize_staged(&self.output_dir, &name, root.node())?,
            Strategy::InPlace => materialize(&self.output_dir, &name, root.node())?,
        }

        let path = self.output_dir.join(&name);
        info!(
            "Generated {} directories and {} files in {}",
            root.dir_count(),
            root.file_count(),
            path.display()
        );

        Ok(Outcome::Created { name, path, committed: false })
    }

    /// Bootstraps version control in a freshly created root.
    ///
    /// Conflicts, and every outcome when no bootstrapper is set, are
    /// returned unchanged.
    ///
    /// # Errors
    /// * `Error::VcsError` if the bootstrap fails; the tree stays on disk
    pub fn commit(&self, outcome: Outcome) -> Result<Outcome> {
        match (self.vcs, outcome) {
            (Some(vcs), Outcome::Created { name, path, committed: false }) => {
                if let Err(e) = vcs.bootstrap(&path) {
                    warn!("Project '{name}' was generated but is not under version control");
                    return Err(e);
                }
                Ok(Outcome::Created { name, path, committed: true })
            }
            (_, outcome) => Ok(outcome),
        }
    }
}
