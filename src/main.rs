//! `roster-rotate` — run and rotate a course roster CSV, driven by `roster.toml`.
//!
//! # Overview
//!
//! An external roster program reads `roster.csv` and writes its updated
//! version to `roster.csv.out`.  This binary wraps that cycle: start the
//! program, then either promote the `.out` file to be the new roster
//! (optionally archiving the old one under today's date) or throw it away.
//!
//! # Usage
//!
//! ```text
//! roster-rotate run             # cargo run -- roster.csv
//! roster-rotate rotate          # roster.csv → 2026-10-19.roster.csv, roster.csv.out → roster.csv
//! roster-rotate rm              # delete roster.csv.out
//! roster-rotate init            # scaffold a roster.toml in the current directory
//! roster-rotate --print-config  # show parsed config without touching any file
//! ```
//!
//! Anything else prints usage on stdout and exits 1.
//!
//! # Module layout
//!
//! | Module                   | Responsibility                              |
//! |--------------------------|---------------------------------------------|
//! | [`cli`]                  | Argument types parsed by clap, usage text   |
//! | [`config`]               | `Config` struct + TOML loader               |
//! | [`error`]                | Error taxonomy and exit statuses            |
//! | [`roster`]               | Roster paths, rename/remove operations      |
//! | [`runner`]               | Runner argument building and execution      |
//! | [`ui`]                   | Stage lines and error output                |
//! | [`commands`]             | One handler per subcommand                  |

mod cli;
mod commands;
mod config;
mod error;
mod roster;
mod runner;
mod ui;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use cli::{Cli, Subcommand, config_path_from_args, usage};
use config::{RotateMode, load_config, usage_mode};
use error::Error;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        },
        Err(_) => {
            let config = config_path_from_args(std::env::args_os());
            print!("{}", usage(usage_mode(&config)));
            return ExitCode::from(error::EXIT_FAILURE);
        },
    };

    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage) => ExitCode::from(Error::Usage.exit_status()),
        Err(e) => {
            // Runner failures already spoke for themselves on the terminal.
            if !matches!(e, Error::ExternalCommand { .. }) {
                ui::print_error(&e);
            }
            ExitCode::from(e.exit_status())
        },
    }
}

fn dispatch(cli: &Cli) -> Result<(), Error> {
    // ── --print-config never touches a file, whatever the subcommand ─────────
    if cli.print_config {
        println!("{:#?}", load_config(&cli.config)?);
        return Ok(());
    }

    let command = match cli.command {
        None => return usage_error(usage_mode(&cli.config)),
        Some(Subcommand::Init) => return commands::init::run(&cli.config),
        Some(command) => command,
    };

    let cfg = load_config(&cli.config)?;

    match command {
        Subcommand::Run => commands::run::run(&cfg),
        Subcommand::Rotate => commands::rotate::run(&cfg),
        Subcommand::Rm if cfg.rotate.mode == RotateMode::Archive => commands::rm::run(&cfg),
        Subcommand::Rm | Subcommand::Init => usage_error(cfg.rotate.mode),
    }
}

fn usage_error(mode: RotateMode) -> Result<(), Error> {
    print!("{}", usage(mode));
    Err(Error::Usage)
}
