use clap::Parser;
use sprout::cli::Args;
use sprout::constants::DEFAULT_ROOT_NAME;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("sprout")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_default_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.name, DEFAULT_ROOT_NAME);
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert_eq!(parsed.template, None);
    assert!(!parsed.in_place);
    assert!(!parsed.no_git);
    assert!(!parsed.dry_run);
    assert!(!parsed.dump_template);
    assert!(!parsed.verbose);
}

#[test]
fn test_project_name() {
    let parsed = Args::try_parse_from(make_args(&["proj"])).unwrap();
    assert_eq!(parsed.name, "proj");
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--output-dir",
        "/tmp/out",
        "--template",
        "layout.yaml",
        "--in-place",
        "--no-git",
        "--dry-run",
        "--verbose",
        "proj",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, "proj");
    assert_eq!(parsed.output_dir, PathBuf::from("/tmp/out"));
    assert_eq!(parsed.template, Some(PathBuf::from("layout.yaml")));
    assert!(parsed.in_place);
    assert!(parsed.no_git);
    assert!(parsed.dry_run);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-o", "out", "-t", "layout.json", "-v", "proj"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output_dir, PathBuf::from("out"));
    assert_eq!(parsed.template, Some(PathBuf::from("layout.json")));
    assert!(parsed.verbose);
}

#[test]
fn test_dump_conflicts_with_dry_run() {
    let args = make_args(&["--dump-template", "--dry-run"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["proj", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
