//! Error taxonomy and the exit status each error maps to.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Exit status used when the runner command cannot be spawned at all,
/// matching the shell's "command not found".
pub const EXIT_NOT_FOUND: u8 = 127;

pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unrecognised subcommand.
    #[error("missing or unrecognised command")]
    Usage,

    #[error("cannot run an empty runner command; set [runner].command in roster.toml")]
    EmptyCommand,

    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with status {code}")]
    ExternalCommand { command: String, code: i32 },

    #[error("`{command}` was terminated by a signal")]
    Signalled { command: String },

    #[error("roster path '{}' has no file name", .0.display())]
    InvalidRosterPath(PathBuf),

    /// `out_suffix` would make the pending output the roster file itself.
    #[error("[roster].out_suffix {suffix:?} makes the pending output the same file as {}", .roster.display())]
    OutputIsRoster { roster: PathBuf, suffix: String },

    #[error("{} does not exist", .0.display())]
    MissingSource(PathBuf),

    #[error("{} already exists; refusing to overwrite it", .0.display())]
    ArchiveExists(PathBuf),

    #[error("{op} {}: {source}", .path.display())]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] anyhow::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// The runner's own status is passed through unchanged when it fits in a
    /// `u8`; everything else is a plain failure.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Spawn { .. } => EXIT_NOT_FOUND,
            Self::ExternalCommand { code, .. } => u8::try_from(*code)
                .ok()
                .filter(|c| *c != 0)
                .unwrap_or(EXIT_FAILURE),
            _ => EXIT_FAILURE,
        }
    }
}
