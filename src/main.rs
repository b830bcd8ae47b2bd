//! Sprout's main application entry point.
//! Handles command-line argument parsing and drives a generation run.

use sprout::{
    cli::{get_args, Args},
    constants::COMMITTED_MESSAGE,
    error::{default_error_handler, Result},
    generator::{Generator, Outcome, Strategy},
    materializer::plan,
    template::{
        loader::{dump_template, load_template},
        TargetRoot, Template,
    },
    vcs::GitCli,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template file, or picks the built-in layout
/// 2. Dumps the template or prints the plan when asked to
/// 3. Generates the project unless its directory already exists
/// 4. Reports the generated project, then commits the generated tree to a new git repository
fn run(args: Args) -> Result<()> {
    let template = match &args.template {
        Some(path) => load_template(path)?,
        None => Template::builtin(),
    };

    if args.dump_template {
        print!("{}", dump_template(&template)?);
        return Ok(());
    }

    let root = TargetRoot::new(args.name, template)?;

    if args.dry_run {
        for entry in plan(&root) {
            println!("{}: '{}'", entry.kind, args.output_dir.join(&entry.path).display());
        }
        return Ok(());
    }

    let git = GitCli::new();
    let strategy = if args.in_place { Strategy::InPlace } else { Strategy::Staged };
    let mut generator = Generator::new(&args.output_dir).strategy(strategy);
    if !args.no_git {
        generator = generator.vcs(&git);
    }

    let outcome = generator.create(&root)?;
    println!("{outcome}");

    if let Outcome::Created { committed: true, .. } = generator.commit(outcome)? {
        println!("{COMMITTED_MESSAGE}");
    }
    Ok(())
}
