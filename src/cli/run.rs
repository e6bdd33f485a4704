use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{
    args::Arguments,
    exit_status::ExitStatus,
    report::{Channel, Reporter, print_error, print_warning},
};
use crate::{
    config::load_config,
    extract::extract_files,
    keys::{flatten, load_expected_keys, validate},
    scan::scan_files,
    tree::DocTree,
};

/// Main entry point for the adoctips CLI.
///
/// Resolves inputs, extracts doc comments, optionally checks the keys and
/// writes the JSON document.
///
/// # Returns
/// - `Ok(ExitStatus)` describing how the run ended
/// - `Err` for internal errors such as an invalid config file
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine working directory")?;
    let loaded = load_config(&cwd)?;
    let config = loaded.config;
    let ignores = config.ignore_patterns()?;

    let output = args.output.or_else(|| config.output.map(PathBuf::from));
    let expected_keys = args
        .expected_keys
        .or_else(|| config.expected_keys.map(PathBuf::from));
    let inputs: Vec<PathBuf> = if args.paths.is_empty() {
        config.paths.iter().map(PathBuf::from).collect()
    } else {
        args.paths
    };

    let channel = if output.is_some() {
        Channel::Stdout
    } else {
        Channel::Stderr
    };
    let reporter = Reporter::new(channel, args.verbose);

    if let Some(path) = &loaded.path {
        reporter.progress(format!("Using config {}", path.display()));
    }

    let scan = scan_files(&inputs, &config.extensions, &ignores, args.verbose);
    for path in &scan.missing {
        reporter.progress(format!("Skipping missing path {}", path.display()));
    }
    if scan.skipped_count > 0 {
        reporter.progress(format!(
            "Skipped {} inaccessible path(s)",
            scan.skipped_count
        ));
    }

    if scan.files.is_empty() {
        print_error("No docs found");
        return Ok(ExitStatus::Failure);
    }
    reporter.progress(format!("Found {} doc file(s)", scan.files.len()));

    let extracted = extract_files(&scan.files);
    for file in &extracted.files_read {
        reporter.progress(format!("Read {}", file));
    }
    for warning in &extracted.warnings {
        print_warning(warning);
    }

    let tree = extracted.tree;
    reporter.progress(format!("Extracted {} key(s)", flatten(&tree).len()));

    let mut status = ExitStatus::Success;

    if let Some(path) = &expected_keys
        && !check_keys(path, &tree, &reporter)
    {
        status = ExitStatus::Failure;
    }

    if let Err(err) = write_output(&tree, output.as_deref()) {
        print_error(format!("{:#}", err));
        return Ok(ExitStatus::Failure);
    }
    if let Some(path) = &output {
        reporter.progress(format!("Wrote {}", path.display()));
    }

    Ok(status)
}

/// Run the key check. Returns false if it failed or could not run.
fn check_keys(path: &Path, tree: &DocTree, reporter: &Reporter) -> bool {
    match load_expected_keys(path) {
        Ok(expected) => {
            let validation = validate(&expected, tree);
            reporter.validation(&validation, expected.len());
            validation.passed()
        }
        Err(err) => {
            print_error(format!("{:#}", err));
            false
        }
    }
}

fn write_output(tree: &DocTree, output: Option<&Path>) -> Result<()> {
    let json = tree.to_json()?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(path, json)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
