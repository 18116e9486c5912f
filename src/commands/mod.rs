//! Subcommand handlers.
//!
//! Each file in this module corresponds to one user-facing command:
//!
//! | File          | Invocation              | Description                        |
//! |---------------|-------------------------|------------------------------------|
//! | `init.rs`     | `roster-rotate init`    | Scaffold a `roster.toml`           |
//! | `run.rs`      | `roster-rotate run`     | Hand the roster to the runner      |
//! | `rotate.rs`   | `roster-rotate rotate`  | Promote `<roster>.out`             |
//! | `rm.rs`       | `roster-rotate rm`      | Discard `<roster>.out`             |

pub mod init;
pub mod rm;
pub mod rotate;
pub mod run;
