//! Command-line interface definition.
//!
//! All argument parsing lives here so the rest of the codebase can stay
//! agnostic to `clap`.  The `Cli` struct is parsed once in `main` and then
//! passed (by reference) into the command handlers.
//!
//! Unrecognised input never reaches clap's own error printer: `main` turns
//! every parse failure other than `--help`/`--version` into [`usage`] on
//! stdout and exit status 1.

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::config::RotateMode;

/// Top-level CLI arguments, shared across every subcommand.
#[derive(Parser, Debug)]
#[command(
    name    = "roster-rotate",
    about   = "Run and rotate a course roster CSV, driven by roster.toml",
    version,
    help_template = "\
{before-help}{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct Cli {
    /// Path to the configuration file.
    ///
    /// Defaults to `roster.toml` in the current working directory.  When the
    /// file does not exist the global config (or built-in defaults) is used.
    #[arg(short, long, default_value = "roster.toml")]
    pub config: PathBuf,

    /// Subcommand to run.  Omitting it prints usage and exits 1.
    #[command(subcommand)]
    pub command: Option<Subcommand>,

    /// Print the parsed configuration and exit without running anything.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(clap::Subcommand, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Subcommand {
    /// Hand the roster to the configured runner command.
    ///
    /// The roster path is appended as the runner's only extra argument.  The
    /// exit status is whatever the runner exits with.
    Run,

    /// Promote `<roster>.out` to be the active roster.
    ///
    /// In `archive` mode the previous roster is first renamed to
    /// `<YYYY-MM-DD>.<roster>`; in `replace` mode it is overwritten.
    Rotate,

    /// Delete a pending `<roster>.out` (archive mode only).
    Rm,

    /// Scaffold a `roster.toml` at the `--config` path.
    ///
    /// Exits with an error if the file already exists.
    Init,
}

/// Usage text printed for missing or unrecognised commands.
///
/// `rm` is only offered in archive mode; in replace mode it counts as an
/// unrecognised command.
pub fn usage(mode: RotateMode) -> String {
    let commands = match mode {
        RotateMode::Archive => "run|rotate|rm",
        RotateMode::Replace => "run|rotate",
    };
    format!(
        "Usage: roster-rotate [--config <FILE>] <{commands}>\n\
         \n  run     hand the roster to the runner command\
         \n  rotate  promote <roster>.out to the active roster\n{}",
        if mode == RotateMode::Archive {
            "  rm      delete <roster>.out\n"
        } else {
            ""
        }
    )
}

/// Pull `-c/--config` out of raw arguments that clap refused to parse, so
/// the usage text can still reflect the configured mode.
pub fn config_path_from_args<I>(args: I) -> PathBuf
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter().skip(1);
    let mut found = None;
    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else { continue };
        if text == "-c" || text == "--config" {
            found = args.next().map(PathBuf::from);
        } else if let Some(value) = text.strip_prefix("--config=") {
            found = Some(PathBuf::from(value));
        }
    }
    found.unwrap_or_else(|| PathBuf::from("roster.toml"))
}
