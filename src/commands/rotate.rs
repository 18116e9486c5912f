//! `roster-rotate rotate` — promote `<roster>.out` to the active roster.
//!
//! | Mode      | Steps                                               |
//! |-----------|-----------------------------------------------------|
//! | `archive` | roster → `<today>.<roster>`, then `.out` → roster   |
//! | `replace` | `.out` → roster (previous roster is discarded)      |

use chrono::{Local, NaiveDate};

use crate::{
    config::Config,
    error::Error,
    roster::{self, RosterPaths},
    ui::StageOutcome,
};

/// Rotate using today's local date for the archive name.
pub fn run(cfg: &Config) -> Result<(), Error> {
    run_on(cfg, Local::now().date_naive())
}

pub fn run_on(cfg: &Config, today: NaiveDate) -> Result<(), Error> {
    let paths = RosterPaths::from_config(&cfg.roster)?;

    for step in &roster::rotate(&paths, cfg.rotate.mode, today)? {
        StageOutcome::from(step).print();
    }
    Ok(())
}
