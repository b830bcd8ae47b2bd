//! Template tree model for sprout.
//! A template is an immutable, nested description of directories and files
//! that the materializer reproduces on disk.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub mod fastapi;
pub mod loader;

/// Children of a directory node, keyed by entry name.
pub type Children = IndexMap<String, Node>;

/// A single entry of a template tree.
///
/// The entry name is not stored in the node itself: it is the key under
/// which the node is held by its parent (or the target root name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Directory with named children
    Directory(Children),
    /// File with its exact content
    File(String),
}

impl Node {
    /// Creates a file node holding `content` verbatim.
    pub fn file<S: Into<String>>(content: S) -> Self {
        Node::File(content.into())
    }

    /// Creates a directory node from `(name, node)` pairs.
    ///
    /// A repeated name replaces the earlier entry, keeping names unique.
    pub fn directory<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Node)>,
        K: Into<String>,
    {
        Node::Directory(entries.into_iter().map(|(name, node)| (name.into(), node)).collect())
    }

    pub fn empty_directory() -> Self {
        Node::Directory(Children::new())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Iterates over the direct children; files have none.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        let children = match self {
            Node::Directory(children) => Some(children),
            Node::File(_) => None,
        };
        children.into_iter().flatten().map(|(name, node)| (name.as_str(), node))
    }

    /// Looks up a descendant by its `/`-separated relative path.
    pub fn get(&self, path: &str) -> Option<&Node> {
        path.split('/').try_fold(self, |node, name| match node {
            Node::Directory(children) => children.get(name),
            Node::File(_) => None,
        })
    }

    /// Returns the file content, or `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File(content) => Some(content),
            Node::Directory(_) => None,
        }
    }
}

/// Kind of a generated filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "dir"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// A node flattened to its path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Contents of a project: the children placed under the target root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Template {
    children: Children,
}

impl Template {
    pub fn new(children: Children) -> Self {
        Self { children }
    }

    /// The compiled-in FastAPI project layout.
    pub fn builtin() -> Self {
        fastapi::template()
    }

    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Checks every entry name in the tree with [`validate_name`].
    pub fn validate(&self) -> Result<()> {
        fn check(children: &Children) -> Result<()> {
            for (name, node) in children {
                validate_name(name)?;
                if let Node::Directory(grandchildren) = node {
                    check(grandchildren)?;
                }
            }
            Ok(())
        }
        check(&self.children)
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Template {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(name, node)| (name.into(), node)).collect())
    }
}

/// Top-level directory generated for one invocation.
#[derive(Debug, Clone)]
pub struct TargetRoot {
    name: String,
    node: Node,
}

impl TargetRoot {
    /// Places `template` under a root directory called `name`.
    ///
    /// # Errors
    /// * `Error::ValidationError` if `name` is not a single path component
    pub fn new<S: Into<String>>(name: S, template: Template) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, node: Node::Directory(template.children) })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Lists every entry depth-first, parents before their children,
    /// with paths relative to the output directory.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries = Vec::new();
        collect_entries(Path::new(""), &self.name, &self.node, &mut entries);
        entries
    }

    /// Number of file nodes in the tree.
    pub fn file_count(&self) -> usize {
        self.entries().iter().filter(|e| e.kind == EntryKind::File).count()
    }

    /// Number of directory nodes in the tree, the root included.
    pub fn dir_count(&self) -> usize {
        self.entries().iter().filter(|e| e.kind == EntryKind::Directory).count()
    }
}

fn collect_entries(parent: &Path, name: &str, node: &Node, entries: &mut Vec<Entry>) {
    let path = parent.join(name);
    let kind = if node.is_directory() { EntryKind::Directory } else { EntryKind::File };
    entries.push(Entry { path: path.clone(), kind });
    for (child_name, child) in node.children() {
        collect_entries(&path, child_name, child, entries);
    }
}

/// Ensures `name` is a single normal path component.
///
/// Rejects empty names, `.`, `..` and names containing a path separator,
/// so that nothing is ever written outside the generated tree.
pub fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0']);

    if valid {
        Ok(())
    } else {
        Err(Error::ValidationError(format!("invalid entry name '{name}'")))
    }
}
