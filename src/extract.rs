//! Extraction of doc comments from asciidoc sources.
//!
//! Recognized forms:
//!
//! ```text
//! // form.name.label:Name
//! // form.name.tooltip:start
//! The name shown in the list view.
//! Must be unique.
//! // form.name.tooltip:stop
//! ```
//!
//! Single-line comments assign their value directly. Everything between a
//! `start` and a `stop` sentinel is joined with single spaces and assigned to
//! the key on the `stop` line.

use std::{fmt, fs, path::Path, sync::LazyLock};

use regex::Regex;

use crate::tree::DocTree;

const BLOCK_START: &str = "start";
const BLOCK_STOP: &str = "stop";

// Capture group 1: key path (up to the first colon)
// Capture group 2: raw value (rest of the line)
static DOC_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^// ([^:]*):(.*)$").unwrap());

/// A recoverable problem found while extracting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractWarning {
    /// The file could not be read and was skipped.
    Unreadable { file_path: String, error: String },
    /// A `stop` sentinel with no block in progress.
    StrayStop {
        file_path: String,
        line: usize,
        key: String,
    },
    /// A `start` sentinel whose block never reached a `stop`.
    UnclosedBlock {
        file_path: String,
        line: usize,
        key: String,
    },
    /// A key path with an empty segment, e.g. `a..b`.
    EmptySegment {
        file_path: String,
        line: usize,
        key: String,
    },
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractWarning::Unreadable { file_path, error } => {
                write!(f, "Cannot read {}: {}", file_path, error)
            }
            ExtractWarning::StrayStop {
                file_path,
                line,
                key,
            } => write!(
                f,
                "{}:{}: '{}:stop' without a matching start, ignored",
                file_path, line, key
            ),
            ExtractWarning::UnclosedBlock {
                file_path,
                line,
                key,
            } => write!(
                f,
                "{}:{}: '{}:start' is never stopped, block discarded",
                file_path, line, key
            ),
            ExtractWarning::EmptySegment {
                file_path,
                line,
                key,
            } => write!(
                f,
                "{}:{}: key '{}' has an empty segment, ignored",
                file_path, line, key
            ),
        }
    }
}

/// Result of extracting doc comments from a list of files.
#[derive(Debug, Default)]
pub struct ExtractResult {
    pub tree: DocTree,
    /// Files that were read successfully.
    pub files_read: Vec<String>,
    pub warnings: Vec<ExtractWarning>,
}

/// Block value being collected between `start` and `stop`.
struct Block {
    key: String,
    line: usize,
    lines: Vec<String>,
}

/// Extract doc comments from `paths`, in order, into one tree.
///
/// Unreadable files are skipped with a warning. Later files overwrite keys
/// set by earlier ones.
pub fn extract_files<P: AsRef<Path>>(paths: &[P]) -> ExtractResult {
    let mut result = ExtractResult::default();

    for path in paths {
        let path = path.as_ref();
        let file_path = path.to_string_lossy().to_string();

        match fs::read(path) {
            Ok(bytes) => {
                // Undecodable bytes only spoil their own line
                let source = String::from_utf8_lossy(&bytes);
                let warnings = extract_source(&source, &file_path, &mut result.tree);
                result.warnings.extend(warnings);
                result.files_read.push(file_path);
            }
            Err(e) => result.warnings.push(ExtractWarning::Unreadable {
                file_path,
                error: e.to_string(),
            }),
        }
    }

    result
}

/// Scan one source text and merge its doc comments into `tree`.
pub fn extract_source(source: &str, file_path: &str, tree: &mut DocTree) -> Vec<ExtractWarning> {
    let mut warnings = Vec::new();
    let mut block: Option<Block> = None;

    for (line_idx, line) in source.lines().enumerate() {
        let line_num = line_idx + 1;

        let Some(captures) = DOC_COMMENT_REGEX.captures(line) else {
            if let Some(block) = block.as_mut() {
                block.lines.push(line.trim_end().to_string());
            }
            continue;
        };

        let raw_key = captures.get(1).map_or("", |m| m.as_str());
        let value = captures.get(2).map_or("", |m| m.as_str()).trim_end();

        let Some(segments) = key_segments(raw_key) else {
            warnings.push(ExtractWarning::EmptySegment {
                file_path: file_path.to_string(),
                line: line_num,
                key: raw_key.to_string(),
            });
            continue;
        };

        match value {
            BLOCK_START => {
                // A new start silently replaces a block still in progress.
                block = Some(Block {
                    key: segments.join("."),
                    line: line_num,
                    lines: Vec::new(),
                });
            }
            BLOCK_STOP => match block.take() {
                Some(block) => tree.insert(&segments, block.lines.join(" ")),
                None => warnings.push(ExtractWarning::StrayStop {
                    file_path: file_path.to_string(),
                    line: line_num,
                    key: segments.join("."),
                }),
            },
            _ => tree.insert(&segments, value.to_string()),
        }
    }

    if let Some(block) = block {
        warnings.push(ExtractWarning::UnclosedBlock {
            file_path: file_path.to_string(),
            line: block.line,
            key: block.key,
        });
    }

    warnings
}

/// Split a raw key path on `.` and remove whitespace from each segment.
///
/// Returns `None` if any segment ends up empty.
pub fn key_segments(raw_key: &str) -> Option<Vec<String>> {
    raw_key
        .split('.')
        .map(strip_whitespace)
        .map(|segment| (!segment.is_empty()).then_some(segment))
        .collect()
}

pub(crate) fn strip_whitespace(segment: &str) -> String {
    segment.chars().filter(|c| !c.is_whitespace()).collect()
}
