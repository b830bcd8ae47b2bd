//! Command-line interface implementation for sprout.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_ROOT_NAME;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for sprout.
#[derive(Parser, Debug)]
#[command(author, version, about = "Sprout: project skeleton generator", long_about = None)]
pub struct Args {
    /// Name of the project directory to create
    #[arg(value_name = "NAME", default_value = DEFAULT_ROOT_NAME)]
    pub name: String,

    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON or YAML template file to use instead of the built-in FastAPI layout
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Write directly into the project directory instead of staging.
    /// A failure may then leave a partially generated project behind.
    #[arg(long)]
    pub in_place: bool,

    /// Do not initialize a git repository in the generated project
    #[arg(long)]
    pub no_git: bool,

    /// Print the entries that would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the template as YAML and exit
    #[arg(long, conflicts_with = "dry_run")]
    pub dump_template: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
