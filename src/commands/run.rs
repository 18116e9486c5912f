//! `roster-rotate run` — hand the roster to the external runner.
//!
//! The runner owns the terminal while it runs, so no stage line is printed
//! and its exit status becomes ours.

use crate::{
    config::Config,
    error::Error,
    runner::{build_run_args, run_inherited},
};

pub fn run(cfg: &Config) -> Result<(), Error> {
    run_inherited(&build_run_args(cfg)?)
}
