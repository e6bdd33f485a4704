//! adoctips - asciidoc tooltip extractor
//!
//! Scans asciidoc sources for `// key.path:value` comments, builds a nested
//! key/value tree from them and renders it as JSON for UI labels and
//! tooltips. The extracted keys can be checked against a list of expected
//! keys.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `extract`: Doc comment scanner producing the document tree
//! - `keys`: Flattening the tree into dotted keys and checking them
//! - `scan`: Resolving input files and directories
//! - `tree`: Document tree type and JSON rendering

pub mod cli;
pub mod config;
pub mod extract;
pub mod keys;
pub mod scan;
pub mod tree;
