//! `roster-rotate rm` — discard a pending `<roster>.out`.
//!
//! Only offered in `archive` mode; `main` treats it as a usage error in
//! `replace` mode.

use crate::{
    config::Config,
    error::Error,
    roster::{self, RosterPaths},
    ui::StageOutcome,
};

pub fn run(cfg: &Config) -> Result<(), Error> {
    let paths = RosterPaths::from_config(&cfg.roster)?;

    StageOutcome::from(&roster::remove_output(&paths)?).print();
    Ok(())
}
