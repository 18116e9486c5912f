//! Runner argument construction and execution.
//!
//! [`build_run_args`] is pure so the exact argument vector can be unit-tested
//! without spawning anything; [`run_inherited`] does the spawning.

use std::process::Command;

use crate::{config::Config, error::Error};

/// `[runner].command` followed by the roster path:
///
/// ```text
/// cargo  run  --  roster.csv
/// ```
///
/// An empty `[runner].command` is an error; the roster is never run as the
/// program itself.
pub fn build_run_args(cfg: &Config) -> Result<Vec<String>, Error> {
    if cfg.runner.command.is_empty() {
        return Err(Error::EmptyCommand);
    }
    let mut cmd = cfg.runner.command.clone();
    cmd.push(cfg.roster.path.clone());
    Ok(cmd)
}

/// Run a command with the parent's stdin/stdout/stderr.
///
/// The roster program is interactive, so nothing is captured.  Returns
/// `Ok(())` only on a zero exit; a non-zero exit becomes
/// [`Error::ExternalCommand`] carrying the child's status.
pub fn run_inherited(args: &[String]) -> Result<(), Error> {
    let (prog, rest) = args.split_first().ok_or(Error::EmptyCommand)?;
    let command = args.join(" ");

    let status = Command::new(prog)
        .args(rest)
        .status()
        .map_err(|source| Error::Spawn {
            command: command.clone(),
            source,
        })?;

    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(Error::ExternalCommand { command, code }),
        None => Err(Error::Signalled { command }),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
