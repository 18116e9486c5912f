//! `roster-rotate init` — scaffold a commented `roster.toml`.
//!
//! The generated file spells out every default so it can be edited in place.
//! An existing file is never overwritten.

use std::{fs, io, path::Path};

use anyhow::Context;

use crate::{
    config::{default_out_suffix, default_roster_path, default_runner_command},
    error::Error,
    ui::StageOutcome,
};

/// Render the starter config.
pub fn template() -> String {
    let command = default_runner_command()
        .iter()
        .map(|a| format!("{a:?}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"# roster-rotate configuration

[roster]
# Active roster CSV.  Relative paths resolve against the working directory.
path       = "{path}"
# The runner writes its updated roster to <path><out_suffix>.
out_suffix = "{suffix}"

[runner]
# Program and leading arguments; the roster path is appended.
command = [{command}]

[rotate]
# "archive": keep the previous roster as <YYYY-MM-DD>.<roster> (enables `rm`)
# "replace": overwrite the previous roster
mode = "archive"
"#,
        path = default_roster_path(),
        suffix = default_out_suffix(),
    )
}

pub fn run(config_path: &Path) -> Result<(), Error> {
    write_new(config_path)?;

    StageOutcome {
        label: "Init".into(),
        detail: format!("wrote {}", config_path.display()),
    }
    .print();
    Ok(())
}

fn write_new(path: &Path) -> anyhow::Result<()> {
    let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            anyhow::bail!("{} already exists, refusing to overwrite it", path.display())
        },
        Err(e) => return Err(e).with_context(|| format!("creating {}", path.display())),
    };
    io::Write::write_all(&mut file, template().as_bytes())
        .with_context(|| format!("writing {}", path.display()))
}
