//! Roster file layout and the filesystem operations behind `rotate` / `rm`.
//!
//! Three paths are involved, all derived from `[roster].path`:
//!
//! | Path                     | Example                        |
//! |--------------------------|--------------------------------|
//! | roster                   | `class/roster.csv`             |
//! | pending output           | `class/roster.csv.out`         |
//! | dated archive            | `class/2026-10-19.roster.csv`  |
//!
//! Nothing here prints; callers in [`crate::commands`] turn the returned
//! [`Step`]s into stage lines.

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::{
    config::{RosterConfig, RotateMode},
    error::Error,
};

/// Resolved paths for one roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterPaths {
    pub roster: PathBuf,
    pub output: PathBuf,
    file_name: OsString,
}

impl RosterPaths {
    /// Derive the pending-output path by appending `out_suffix` to `roster`.
    ///
    /// The output must be a distinct sibling of the roster: an empty suffix,
    /// or one containing a path separator, is rejected.
    pub fn new(roster: impl Into<PathBuf>, out_suffix: &str) -> Result<Self, Error> {
        let roster = roster.into();
        let file_name = roster
            .file_name()
            .map(ToOwned::to_owned)
            .ok_or_else(|| Error::InvalidRosterPath(roster.clone()))?;

        let mut output = roster.clone().into_os_string();
        output.push(out_suffix);
        let output = PathBuf::from(output);

        if out_suffix.is_empty()
            || out_suffix.contains(std::path::is_separator)
            || output == roster
        {
            return Err(Error::OutputIsRoster {
                roster,
                suffix: out_suffix.to_string(),
            });
        }

        Ok(Self {
            roster,
            output,
            file_name,
        })
    }

    pub fn from_config(cfg: &RosterConfig) -> Result<Self, Error> {
        Self::new(&cfg.path, &cfg.out_suffix)
    }

    /// `<date>.<file name>` next to the roster.
    pub fn dated_backup(&self, date: NaiveDate) -> PathBuf {
        let mut name = OsString::from(date.format("%Y-%m-%d").to_string());
        name.push(".");
        name.push(&self.file_name);
        self.roster.with_file_name(name)
    }
}

/// One completed filesystem action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Archived { from: PathBuf, to: PathBuf },
    Replaced { from: PathBuf, to: PathBuf },
    Removed(PathBuf),
}

/// Promote the pending output to be the active roster.
///
/// All preconditions are checked before the first rename, so a missing
/// source or an existing archive leaves every file as it was.  In
/// [`RotateMode::Archive`], a failure of the second rename moves the archive
/// back into place before the error is returned.
pub fn rotate(paths: &RosterPaths, mode: RotateMode, today: NaiveDate) -> Result<Vec<Step>, Error> {
    rotate_with(paths, mode, today, |from, to| fs::rename(from, to))
}

/// [`rotate`] with the rename primitive supplied by the caller.
fn rotate_with<F>(
    paths: &RosterPaths,
    mode: RotateMode,
    today: NaiveDate,
    mut rename_fn: F,
) -> Result<Vec<Step>, Error>
where
    F: FnMut(&Path, &Path) -> io::Result<()>,
{
    let mut rename = |from: &Path, to: &Path| {
        rename_fn(from, to).map_err(|source| Error::Filesystem {
            op: "rename",
            path: from.to_path_buf(),
            source,
        })
    };

    require_file(&paths.output)?;

    match mode {
        RotateMode::Replace => {
            rename(&paths.output, &paths.roster)?;
            Ok(vec![Step::Replaced {
                from: paths.output.clone(),
                to: paths.roster.clone(),
            }])
        },
        RotateMode::Archive => {
            let backup = paths.dated_backup(today);
            require_file(&paths.roster)?;
            if backup.exists() {
                return Err(Error::ArchiveExists(backup));
            }

            rename(&paths.roster, &backup)?;
            if let Err(e) = rename(&paths.output, &paths.roster) {
                // Best effort; the rename error above is what gets reported.
                let _ = rename(&backup, &paths.roster);
                return Err(e);
            }

            Ok(vec![
                Step::Archived {
                    from: paths.roster.clone(),
                    to: backup,
                },
                Step::Replaced {
                    from: paths.output.clone(),
                    to: paths.roster.clone(),
                },
            ])
        },
    }
}

/// Delete the pending output.
pub fn remove_output(paths: &RosterPaths) -> Result<Step, Error> {
    require_file(&paths.output)?;
    fs::remove_file(&paths.output).map_err(|source| Error::Filesystem {
        op: "remove",
        path: paths.output.clone(),
        source,
    })?;
    Ok(Step::Removed(paths.output.clone()))
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn require_file(path: &Path) -> Result<(), Error> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::MissingSource(path.to_path_buf()))
        },
        Err(source) => Err(Error::Filesystem {
            op: "stat",
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
