//! Common constants used throughout the sprout application.

/// Name of the generated project directory when none is given
pub const DEFAULT_ROOT_NAME: &str = "my_fastapi_project";

/// Message of the first commit created in the generated project
pub const INITIAL_COMMIT_MESSAGE: &str =
    "Initial commit with project structure and punch/user features";

/// Printed once the generated project has been committed
pub const COMMITTED_MESSAGE: &str = "Git repository initialized and initial commit made.";

/// Version control program invoked after generation
pub const VCS_PROGRAM: &str = "git";

/// Prefix of the private staging directory created inside the output directory
pub const STAGING_PREFIX: &str = ".sprout-staging-";
