//! Template file loading for sprout.
//! A template file is a nested mapping where a mapping describes a directory
//! and a string holds the content of a file. JSON and YAML are supported.

use super::{Children, Node, Template};
use crate::error::{Error, Result};
use log::debug;
use serde_json::Value;
use std::path::Path;

/// Loads a template from a JSON or YAML file.
///
/// # Arguments
/// * `path` - Path to the template file
///
/// # Returns
/// * `Result<Template>` - Parsed and validated template
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::ConfigError` if the content is not a nested mapping of strings
/// * `Error::ValidationError` if an entry name is not a single path component
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<Template> {
    let path = path.as_ref();
    debug!("Loading template from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_template(&content)
}

/// Parses template content, trying JSON first and YAML second.
pub fn parse_template(content: &str) -> Result<Template> {
    let raw_value: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid template format: {e}")))?,
    };

    let Value::Object(entries) = raw_value else {
        return Err(Error::ConfigError(format!(
            "template must be a mapping of entry names, found {}",
            describe(&raw_value)
        )));
    };

    let mut children = Children::new();
    for (name, value) in entries {
        let node = to_node(Path::new(&name), value)?;
        children.insert(name, node);
    }

    let template = Template::new(children);
    template.validate()?;
    Ok(template)
}

/// Serializes a template to YAML in the shape accepted by [`parse_template`].
pub fn dump_template(template: &Template) -> Result<String> {
    serde_yaml::to_string(template)
        .map_err(|e| Error::ConfigError(format!("Cannot serialize template: {e}")))
}

fn to_node(path: &Path, value: Value) -> Result<Node> {
    match value {
        Value::String(content) => Ok(Node::File(content)),
        Value::Object(entries) => {
            let mut children = Children::new();
            for (name, value) in entries {
                let node = to_node(&path.join(&name), value)?;
                children.insert(name, node);
            }
            Ok(Node::Directory(children))
        }
        other => Err(Error::ConfigError(format!(
            "'{}' must be a string or a mapping, found {}",
            path.display(),
            describe(&other)
        ))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
