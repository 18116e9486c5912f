//! Configuration types and loading logic.
//!
//! `Config` is a direct 1-to-1 mapping of `roster.toml`.  Every field has a
//! `Default` impl so the file is entirely optional — running `roster-rotate`
//! without any config file falls back to `roster.csv` in the current
//! directory and `cargo run --` as the runner.
//!
//! # File format
//!
//! ```toml
//! [roster]
//! path       = "roster.csv"
//! out_suffix = ".out"
//!
//! [runner]
//! command = ["cargo", "run", "--"]   # roster path is appended
//!
//! [rotate]
//! mode = "archive"                   # or "replace"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ─── Top-level ────────────────────────────────────────────────────────────────

/// Root configuration object, deserialised from `roster.toml`.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// Where the roster lives and how its pending output is named.
    #[serde(default)]
    pub roster: RosterConfig,

    /// External program that processes the roster.
    #[serde(default)]
    pub runner: RunnerConfig,

    /// How `rotate` treats the previous roster.
    #[serde(default)]
    pub rotate: RotateConfig,
}

// ─── [roster] ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
pub struct RosterConfig {
    /// Path of the active roster CSV.  Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_roster_path")]
    pub path: String,

    /// Suffix appended to `path` for the runner's pending output.
    #[serde(default = "default_out_suffix")]
    pub out_suffix: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: default_roster_path(),
            out_suffix: default_out_suffix(),
        }
    }
}

// ─── [runner] ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// Program and leading arguments.  The roster path is appended as the
    /// final argument.
    #[serde(default = "default_runner_command")]
    pub command: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            command: default_runner_command(),
        }
    }
}

// ─── [rotate] ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct RotateConfig {
    #[serde(default)]
    pub mode: RotateMode,
}

/// What happens to the previous roster on `rotate`.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotateMode {
    /// Keep the previous roster as `<YYYY-MM-DD>.<roster>`.  Enables `rm`.
    #[default]
    Archive,
    /// Overwrite the previous roster.
    Replace,
}

// ─── Defaults ─────────────────────────────────────────────────────────────────

// serde needs free functions for per-field defaults.

pub fn default_roster_path() -> String {
    "roster.csv".into()
}

pub fn default_out_suffix() -> String {
    ".out".into()
}

pub fn default_runner_command() -> Vec<String> {
    vec!["cargo".into(), "run".into(), "--".into()]
}

// ─── Loader ───────────────────────────────────────────────────────────────────

/// `<config_dir>/roster-rotate/config.toml`, if the platform has a config dir.
pub fn global_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|d| d.join("roster-rotate").join("config.toml"))
}

/// Parse `path` if it exists.
///
/// Returns `Ok(None)` for a missing file and an error if the file exists but
/// cannot be read or is not valid TOML.
pub fn parse_file(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    toml::from_str(&text)
        .map(Some)
        .with_context(|| format!("parsing {}", path.display()))
}

/// Load the configuration for this invocation.
///
/// 1. `local_path` (default: `./roster.toml`)
/// 2. the global config from [`global_config_path`]
/// 3. built-in defaults, with a warning on stderr
pub fn load_config(local_path: &Path) -> Result<Config> {
    if let Some(cfg) = parse_file(local_path)? {
        return Ok(cfg);
    }

    if let Some(global) = global_config_path() {
        if let Some(cfg) = parse_file(&global)? {
            return Ok(cfg);
        }
    }

    eprintln!(
        "Warning: config file '{}' not found, using defaults.\n\
         Run 'roster-rotate init' to generate a starter config.",
        local_path.display()
    );
    Ok(Config::default())
}

/// Rotate mode for usage text only.
///
/// Same lookup order as [`load_config`], but silent: a missing or broken
/// file falls back to the default mode instead of failing.
pub fn usage_mode(local_path: &Path) -> RotateMode {
    std::iter::once(Some(local_path.to_path_buf()))
        .chain(std::iter::once(global_config_path()))
        .flatten()
        .find_map(|p| parse_file(&p).ok().flatten())
        .map(|cfg| cfg.rotate.mode)
        .unwrap_or_default()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
