//! Terminal output — stage lines and error reporting.
//!
//! Every filesystem action is reported as one line:
//!
//! ```text
//!   ✓  Archive  roster.csv → 2026-10-19.roster.csv
//!   ✓  Replace  roster.csv.out → roster.csv
//! ```
//!
//! Failures are reported once, by `main`, as a red `✗ Error: …` on stderr.

use console::style;

use crate::{error::Error, roster::Step};

// ─── Icons ───────────────────────────────────────────────────────────────────

fn icon_ok() -> console::StyledObject<&'static str> {
    style("✓").green().bold()
}
fn icon_err() -> console::StyledObject<&'static str> {
    style("✗").red().bold()
}

// ─── Stage result ─────────────────────────────────────────────────────────────

/// A completed step, ready to print.
#[derive(Debug)]
pub struct StageOutcome {
    /// Short label, e.g. `"Archive"`.
    pub label: String,
    /// What was done, e.g. `"roster.csv → 2026-10-19.roster.csv"`.
    pub detail: String,
}

impl StageOutcome {
    pub fn print(&self) {
        println!(
            "  {}  {}  {}",
            icon_ok(),
            style(&self.label).bold(),
            style(&self.detail).dim()
        );
    }
}

impl From<&Step> for StageOutcome {
    fn from(step: &Step) -> Self {
        let (label, detail) = match step {
            Step::Archived { from, to } => {
                ("Archive", format!("{} → {}", from.display(), to.display()))
            },
            Step::Replaced { from, to } => {
                ("Replace", format!("{} → {}", from.display(), to.display()))
            },
            Step::Removed(path) => ("Remove", path.display().to_string()),
        };
        Self {
            label: label.to_string(),
            detail,
        }
    }
}

// ─── Errors ───────────────────────────────────────────────────────────────────

fn print_error_message(msg: &str) {
    eprintln!("  {}  {} {}", icon_err(), style("Error:").red().bold(), msg);
}

/// Print `err` to stderr.  Config errors carry an anyhow context chain,
/// which is flattened onto the same line.
pub fn print_error(err: &Error) {
    match err {
        Error::Config(e) => print_error_message(&format!("{e:#}")),
        other => print_error_message(&other.to_string()),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
