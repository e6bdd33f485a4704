use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".adoctipsrc.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Inputs used when none are given on the command line.
    #[serde(default)]
    pub paths: Vec<String>,
    /// File extensions collected when walking directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob patterns excluded during directory walks.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub expected_keys: Option<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["adoc".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            output: None,
            expected_keys: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        self.ignore_patterns()?;
        Ok(())
    }

    /// Compile `ignores` into glob patterns.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })
            })
            .collect()
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
