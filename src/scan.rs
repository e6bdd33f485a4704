use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of resolving input paths into files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files in processing order.
    pub files: Vec<PathBuf>,
    /// Input paths that did not exist.
    pub missing: Vec<PathBuf>,
    /// Directory entries that could not be accessed during the walk.
    pub skipped_count: usize,
}

/// Resolve files and directories into the ordered list of files to extract.
///
/// Files are taken as given. Directories are walked recursively in file-name
/// order, keeping files with one of `extensions` that match none of
/// `ignores`. Paths that don't exist are dropped. Each file is kept once, at
/// its first position.
pub fn scan_files<P: AsRef<Path>>(
    inputs: &[P],
    extensions: &[String],
    ignores: &[Pattern],
    verbose: bool,
) -> ScanResult {
    let mut result = ScanResult::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for input in inputs {
        let input = input.as_ref();

        if input.is_file() {
            if seen.insert(input.to_path_buf()) {
                result.files.push(input.to_path_buf());
            }
            continue;
        }

        if !input.is_dir() {
            result.missing.push(input.to_path_buf());
            continue;
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if !path.is_file() || !has_extension(path, extensions) {
                continue;
            }

            if ignores.iter().any(|p| p.matches_path(path)) {
                continue;
            }

            if seen.insert(path.to_path_buf()) {
                result.files.push(path.to_path_buf());
            }
        }
    }

    result
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
