//! Sprout generates a project skeleton from a declarative template tree
//! and records it as the first commit of a new git repository.

/// Command-line interface module for the sprout application
pub mod cli;

/// Compiled-in defaults
pub mod constants;

/// Error types and handling for the sprout application
pub mod error;

/// Run orchestration: guard, materialize, bootstrap
pub mod generator;

/// Pre-flight existence check of the target directory
pub mod guard;

/// Template tree to filesystem conversion
pub mod materializer;

/// Template tree model, built-in layout and template files
pub mod template;

/// Version control bootstrap of generated projects
pub mod vcs;
