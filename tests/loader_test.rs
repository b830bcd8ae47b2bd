use sprout::error::Error;
use sprout::template::loader::{dump_template, load_template, parse_template};
use sprout::template::{Node, Template};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_json_template() {
    let template = parse_template(
        r##"{"src": {"__init__.py": "", "main.py": "print('hello')\n"}, "README.md": "# demo\n"}"##,
    )
    .unwrap();

    let src = template.children().get("src").unwrap();
    assert!(src.is_directory());
    assert_eq!(src.get("main.py").and_then(Node::content), Some("print('hello')\n"));
    assert_eq!(template.children().get("README.md").and_then(Node::content), Some("# demo\n"));
}

#[test]
fn test_parse_yaml_template() {
    let content = r#"
src:
  __init__.py: ""
  main.py: |
    print('hello')
models: {}
"#;
    let template = parse_template(content).unwrap();

    let src = template.children().get("src").unwrap();
    assert_eq!(src.get("main.py").and_then(Node::content), Some("print('hello')\n"));
    let models = template.children().get("models").unwrap();
    assert!(models.is_directory());
    assert_eq!(models.children().count(), 0);
}

#[test]
fn test_load_template_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("layout.yaml");
    fs::write(&path, "app:\n  main.py: \"x = 1\\n\"\n").unwrap();

    let template = load_template(&path).unwrap();
    let app = template.children().get("app").unwrap();
    assert_eq!(app.get("main.py").and_then(Node::content), Some("x = 1\n"));
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_template(temp_dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_top_level_must_be_mapping() {
    let result = parse_template("[1, 2, 3]");
    match result {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("a list")),
        _ => panic!("Expected ConfigError"),
    }
}

#[test]
fn test_non_string_leaf_is_rejected() {
    let result = parse_template(r#"{"app": {"version": 3}}"#);
    match result {
        Err(Error::ConfigError(msg)) => {
            assert!(msg.contains("app/version"));
            assert!(msg.contains("a number"));
        }
        _ => panic!("Expected ConfigError"),
    }
}

#[test]
fn test_escaping_names_are_rejected() {
    let result = parse_template(r#"{"app": {"..": {"evil.py": ""}}}"#);
    assert!(matches!(result, Err(Error::ValidationError(_))));

    let result = parse_template(r#"{"app/nested": ""}"#);
    assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[test]
fn test_dumped_builtin_loads_back() {
    let builtin = Template::builtin();
    let dumped = dump_template(&builtin).unwrap();

    assert_eq!(parse_template(&dumped).unwrap(), builtin);
}
