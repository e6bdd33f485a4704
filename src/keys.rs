//! Flattening the document tree into dotted keys and checking those keys
//! against an expected set.

use std::{collections::BTreeSet, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::{
    extract::strip_whitespace,
    tree::{DocTree, Node},
};

/// Optional annotation key, never part of the documented UI keys when it is a leaf.
const EXTERNAL_KEY: &str = "external";

/// Collect the dotted path of every leaf in `tree`.
pub fn flatten(tree: &DocTree) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for (key, node) in tree.entries() {
        flatten_node(node, key, &strip_whitespace(key), &mut keys);
    }
    keys
}

fn flatten_node(node: &Node, key: &str, path: &str, keys: &mut BTreeSet<String>) {
    match node {
        Node::Leaf(_) if key == EXTERNAL_KEY => {}
        Node::Leaf(_) => {
            keys.insert(path.to_string());
        }
        Node::Branch(children) => {
            for (child_key, child) in children {
                let child_path = format!("{}.{}", path, strip_whitespace(child_key));
                flatten_node(child, child_key, &child_path, keys);
            }
        }
    }
}

/// Outcome of comparing generated keys with expected keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    /// Expected but not generated.
    pub missing: BTreeSet<String>,
    /// Generated but not expected.
    pub extra: BTreeSet<String>,
}

impl Validation {
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compare the keys of `tree` with `expected`.
pub fn validate(expected: &BTreeSet<String>, tree: &DocTree) -> Validation {
    let generated = flatten(tree);
    Validation {
        missing: expected.difference(&generated).cloned().collect(),
        extra: generated.difference(expected).cloned().collect(),
    }
}

/// Load expected keys from a JSON file.
///
/// Accepts either an array of strings or an object, in which case its
/// top-level keys are used.
pub fn load_expected_keys(path: &Path) -> Result<BTreeSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read expected keys file: {}", path.display()))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse expected keys file: {}", path.display()))?;

    parse_expected_keys(json)
        .with_context(|| format!("Invalid expected keys file: {}", path.display()))
}

fn parse_expected_keys(json: Value) -> Result<BTreeSet<String>> {
    match json {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(key) => Ok(key),
                other => bail!("expected a string key, found {}", other),
            })
            .collect(),
        Value::Object(map) => Ok(map.into_iter().map(|(key, _)| key).collect()),
        _ => bail!("root must be an array of keys or an object"),
    }
}
