//! The document tree built from doc comments.
//!
//! A tree maps keys either to nested trees (branches) or to terminal strings
//! (leaves). Keys are stored in a `BTreeMap`, so serialization is always
//! sorted and deterministic.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Indentation used when rendering the tree as JSON.
const JSON_INDENT: &[u8] = b"    ";

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Branch(BTreeMap<String, Node>),
    Leaf(String),
}

impl Node {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Node::Leaf(value) => Some(value.as_str()),
            Node::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Branch(children) => Some(children),
            Node::Leaf(_) => None,
        }
    }
}

/// Nested key/value mapping shared across all files of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocTree {
    root: BTreeMap<String, Node>,
}

impl DocTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Top-level entries, in key order.
    pub fn entries(&self) -> &BTreeMap<String, Node> {
        &self.root
    }

    /// Assign `value` at `path`, creating intermediate branches as needed.
    ///
    /// Existing values are overwritten. A leaf standing where a branch is
    /// needed is replaced by a branch. An empty path is ignored.
    pub fn insert<S: AsRef<str>>(&mut self, path: &[S], value: String) {
        insert_nested(&mut self.root, path, value);
    }

    /// Look up the node at a dotted key, e.g. `"form.name.label"`.
    pub fn get(&self, dotted: &str) -> Option<&Node> {
        let mut parts = dotted.split('.');
        let mut node = self.root.get(parts.next()?)?;
        for part in parts {
            node = node.as_branch()?.get(part)?;
        }
        Some(node)
    }

    /// Convenience lookup for leaf values.
    pub fn leaf(&self, dotted: &str) -> Option<&str> {
        self.get(dotted).and_then(Node::as_leaf)
    }

    /// Render as pretty JSON with 4-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .context("Failed to serialize document tree")?;
        buf.push(b'\n');
        String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")
    }
}

/// Insert a leaf at a nested path, creating intermediate branches as needed.
fn insert_nested<S: AsRef<str>>(root: &mut BTreeMap<String, Node>, path: &[S], value: String) {
    match path {
        [] => {}
        [last] => {
            root.insert(last.as_ref().to_string(), Node::Leaf(value));
        }
        [first, rest @ ..] => {
            let next = root
                .entry(first.as_ref().to_string())
                .or_insert_with(|| Node::Branch(BTreeMap::new()));

            match next {
                Node::Branch(children) => insert_nested(children, rest, value),
                Node::Leaf(_) => {
                    // A leaf in the way becomes a branch holding the new value
                    let mut children = BTreeMap::new();
                    insert_nested(&mut children, rest, value);
                    *next = Node::Branch(children);
                }
            }
        }
    }
}
