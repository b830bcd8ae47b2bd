//! Error handling for the sprout application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for sprout operations.
///
/// A pre-existing target directory is deliberately absent here: it is an
/// ordinary outcome of a run, see [`crate::generator::Outcome`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors in reading or shaping a template file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents invalid entry or project names
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents a failed version control step after generation
    #[error("VCS bootstrap failed at '{step}': {reason}.")]
    VcsError { step: String, reason: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
