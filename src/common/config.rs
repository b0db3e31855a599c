//! Configuration file handling

use serde::Deserialize;
use std::path::PathBuf;

use super::{Error, Result};

/// Name used for the platform config directory
const APP_NAME: &str = "seqcheck";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Target program and expectation file locations
    #[serde(default)]
    pub target: TargetConfig,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,
}

/// Locations of the program under test and its reference output
#[derive(Debug, Deserialize, Clone)]
pub struct TargetConfig {
    /// Path to the program under test
    #[serde(default = "default_program")]
    pub program: PathBuf,

    /// Fallback path tried when `program` does not exist
    #[serde(default = "default_fallback")]
    pub fallback: PathBuf,

    /// Path to the expected output file
    #[serde(default = "default_expected")]
    pub expected: PathBuf,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            fallback: default_fallback(),
            expected: default_expected(),
        }
    }
}

fn default_program() -> PathBuf {
    PathBuf::from("./program")
}
fn default_fallback() -> PathBuf {
    PathBuf::from("./program.exe")
}
fn default_expected() -> PathBuf {
    PathBuf::from("expected_output.txt")
}

/// Timeout settings in seconds
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Timeouts {
    /// Wall-clock budget for one run of the target program
    #[serde(default = "default_run")]
    pub run_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            run_secs: default_run(),
        }
    }
}

fn default_run() -> u64 {
    5
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists
    ///
    /// Lookup order: `./seqcheck.toml` in the working directory, then
    /// `config.toml` in the platform config directory.
    pub fn load() -> Result<Self> {
        for path in candidate_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("seqcheck.toml")];
    if let Some(dirs) = directories::ProjectDirs::from("", "", APP_NAME) {
        paths.push(dirs.config_dir().join("config.toml"));
    }
    paths
}
