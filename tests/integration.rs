//! Integration tests for the `roster-rotate` binary.
//!
//! These tests spawn the compiled binary inside a temporary directory and
//! assert on exit codes, stdout/stderr, and the files left behind.  `cargo`
//! is never invoked as the runner: each test that exercises `run` points
//! `[runner].command` at `sh`.
//!
//! # Running
//!
//! ```sh
//! cargo test --test integration
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

const BIN: &str = env!("CARGO_BIN_EXE_roster-rotate");

// ─── Fixture ──────────────────────────────────────────────────────────────────

/// A scratch working directory with a `roster.toml`.
struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new(mode: &str) -> Self {
        Self::with_runner(mode, r#"["cargo", "run", "--"]"#)
    }

    fn with_runner(mode: &str, command: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("roster.toml"),
            format!(
                r#"
[roster]
path = "roster.csv"

[runner]
command = {command}

[rotate]
mode = "{mode}"
"#
            ),
        )
        .unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, body: &str) {
        fs::write(self.path(name), body).unwrap();
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }

    fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    fn run(&self, args: &[&str]) -> (Option<i32>, String, String) {
        run_in(args, self.dir.path())
    }
}

fn run_in(args: &[&str], dir: &Path) -> (Option<i32>, String, String) {
    let out = Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {BIN}: {e}"));

    (
        out.status.code(),
        String::from_utf8_lossy(&out.stdout).into_owned(),
        String::from_utf8_lossy(&out.stderr).into_owned(),
    )
}

fn today_backup() -> String {
    format!("{}.roster.csv", chrono::Local::now().format("%Y-%m-%d"))
}

// ─── --help / --version ───────────────────────────────────────────────────────

#[test]
fn help_exits_zero() {
    let fx = Fixture::new("archive");
    let (code, stdout, _) = fx.run(&["--help"]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("rotate"));
}

#[test]
fn version_exits_zero() {
    let fx = Fixture::new("archive");
    let (code, stdout, _) = fx.run(&["--version"]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("0.1.0"));
}

// ─── usage ────────────────────────────────────────────────────────────────────

#[test]
fn no_command_prints_usage_and_exits_one() {
    let fx = Fixture::new("archive");
    let (code, stdout, _) = fx.run(&[]);
    assert_eq!(code, Some(1));
    assert!(stdout.contains("Usage:"), "usage goes to stdout; got: {stdout}");
}

#[test]
fn unknown_commands_print_usage_and_exit_one() {
    let fx = Fixture::new("archive");
    for arg in ["shuffle", "ROTATE", "--bogus", "run-now"] {
        let (code, stdout, _) = fx.run(&[arg]);
        assert_eq!(code, Some(1), "{arg} should exit 1");
        assert!(stdout.contains("Usage:"), "{arg} should print usage");
    }
}

#[test]
fn rm_is_unrecognised_in_replace_mode() {
    let fx = Fixture::new("replace");
    fx.write("roster.csv.out", "pending");

    let (code, stdout, _) = fx.run(&["rm"]);

    assert_eq!(code, Some(1));
    assert!(stdout.contains("<run|rotate>"));
    assert!(fx.exists("roster.csv.out"), "rm must not delete in replace mode");
}

#[test]
fn unknown_command_usage_follows_configured_mode() {
    let fx = Fixture::new("replace");

    let (code, stdout, _) = fx.run(&["shuffle"]);

    assert_eq!(code, Some(1));
    assert!(stdout.contains("<run|rotate>"), "stdout:\n{stdout}");
    assert!(!stdout.contains("  rm "), "stdout:\n{stdout}");
}

#[test]
fn unknown_command_usage_honours_config_flag() {
    let fx = Fixture::new("archive");
    fx.write("other.toml", "[rotate]\nmode = \"replace\"\n");

    let (code, stdout, _) = fx.run(&["--config", "other.toml", "shuffle"]);

    assert_eq!(code, Some(1));
    assert!(stdout.contains("<run|rotate>"), "stdout:\n{stdout}");
}

#[test]
fn no_command_prints_usage_even_with_invalid_config() {
    let fx = Fixture::new("archive");
    fx.write("roster.toml", "not valid toml ][[[");

    let (code, stdout, stderr) = fx.run(&[]);

    assert_eq!(code, Some(1));
    assert!(stdout.contains("Usage:"), "stdout:\n{stdout}");
    assert!(!stderr.contains("parsing"), "stderr:\n{stderr}");
}

// ─── rotate ───────────────────────────────────────────────────────────────────

#[test]
fn rotate_replace_promotes_output() {
    let fx = Fixture::new("replace");
    fx.write("roster.csv", "old");
    fx.write("roster.csv.out", "new");

    let (code, _, stderr) = fx.run(&["rotate"]);

    assert_eq!(code, Some(0), "stderr:\n{stderr}");
    assert_eq!(fx.read("roster.csv"), "new");
    assert!(!fx.exists("roster.csv.out"));
    assert!(!fx.exists(&today_backup()));
}

#[test]
fn rotate_archive_keeps_dated_backup() {
    let fx = Fixture::new("archive");
    fx.write("roster.csv", "old");
    fx.write("roster.csv.out", "new");

    let (code, stdout, stderr) = fx.run(&["rotate"]);

    assert_eq!(code, Some(0), "stderr:\n{stderr}");
    assert_eq!(fx.read(&today_backup()), "old");
    assert_eq!(fx.read("roster.csv"), "new");
    assert!(!fx.exists("roster.csv.out"));
    assert!(stdout.contains("Archive"));
}

#[test]
fn rotate_without_output_fails_and_touches_nothing() {
    let fx = Fixture::new("archive");
    fx.write("roster.csv", "old");

    let (code, _, stderr) = fx.run(&["rotate"]);

    assert_ne!(code, Some(0));
    assert!(stderr.contains("does not exist"), "stderr:\n{stderr}");
    assert_eq!(fx.read("roster.csv"), "old");
    assert!(!fx.exists(&today_backup()));
}

#[test]
fn rotate_archive_without_roster_fails_and_touches_nothing() {
    let fx = Fixture::new("archive");
    fx.write("roster.csv.out", "new");

    let (code, _, _) = fx.run(&["rotate"]);

    assert_ne!(code, Some(0));
    assert_eq!(fx.read("roster.csv.out"), "new");
    assert!(!fx.exists("roster.csv"));
}

#[test]
fn second_rotate_on_same_day_is_refused() {
    let fx = Fixture::new("archive");
    fx.write("roster.csv", "v1");
    fx.write("roster.csv.out", "v2");
    assert_eq!(fx.run(&["rotate"]).0, Some(0));

    fx.write("roster.csv.out", "v3");
    let (code, _, stderr) = fx.run(&["rotate"]);

    assert_ne!(code, Some(0));
    assert!(stderr.contains("already exists"), "stderr:\n{stderr}");
    assert_eq!(fx.read(&today_backup()), "v1");
    assert_eq!(fx.read("roster.csv"), "v2");
}

#[test]
fn rotate_refuses_empty_out_suffix() {
    let fx = Fixture::new("archive");
    fx.write(
        "roster.toml",
        "[roster]\npath = \"roster.csv\"\nout_suffix = \"\"\n[rotate]\nmode = \"archive\"\n",
    );
    fx.write("roster.csv", "precious");

    let (code, _, stderr) = fx.run(&["rotate"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("out_suffix"), "stderr:\n{stderr}");
    assert_eq!(fx.read("roster.csv"), "precious");
    assert!(!fx.exists(&today_backup()));
}

// ─── rm ───────────────────────────────────────────────────────────────────────

#[test]
fn rm_deletes_output() {
    let fx = Fixture::new("archive");
    fx.write("roster.csv", "old");
    fx.write("roster.csv.out", "new");

    let (code, _, _) = fx.run(&["rm"]);

    assert_eq!(code, Some(0));
    assert!(!fx.exists("roster.csv.out"));
    assert_eq!(fx.read("roster.csv"), "old");
}

#[test]
fn rm_without_output_fails() {
    let fx = Fixture::new("archive");
    fx.write("roster.csv", "old");

    let (code, _, _) = fx.run(&["rm"]);

    assert_ne!(code, Some(0));
    assert_eq!(fx.read("roster.csv"), "old");
}

#[test]
fn rm_refuses_empty_out_suffix() {
    let fx = Fixture::new("archive");
    fx.write("roster.toml", "[roster]\npath = \"roster.csv\"\nout_suffix = \"\"\n");
    fx.write("roster.csv", "precious");

    let (code, _, stderr) = fx.run(&["rm"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("out_suffix"), "stderr:\n{stderr}");
    assert_eq!(fx.read("roster.csv"), "precious");
}

// ─── run ──────────────────────────────────────────────────────────────────────

#[test]
fn run_forwards_roster_as_only_argument_and_exit_code() {
    let fx = Fixture::with_runner(
        "archive",
        r#"["sh", "-c", "printf '%s %s' \"$#\" \"$1\" > seen.txt; exit 3", "sh"]"#,
    );

    let (code, _, _) = fx.run(&["run"]);

    assert_eq!(code, Some(3));
    assert_eq!(fx.read("seen.txt"), "1 roster.csv");
}

#[test]
fn run_success_exits_zero() {
    let fx = Fixture::with_runner("archive", r#"["sh", "-c", "cp \"$1\" \"$1.out\"", "sh"]"#);
    fx.write("roster.csv", "a\tb\n");

    let (code, _, stderr) = fx.run(&["run"]);

    assert_eq!(code, Some(0), "stderr:\n{stderr}");
    assert_eq!(fx.read("roster.csv.out"), "a\tb\n");
}

#[test]
fn run_with_missing_program_exits_127() {
    let fx = Fixture::with_runner("archive", r#"["definitely-not-a-real-program-7f3a"]"#);

    let (code, _, stderr) = fx.run(&["run"]);

    assert_eq!(code, Some(127));
    assert!(stderr.contains("failed to spawn"), "stderr:\n{stderr}");
}

#[test]
fn run_with_empty_command_fails_without_spawning_roster() {
    let fx = Fixture::with_runner("archive", "[]");
    fx.write("roster.csv", "#!/bin/sh\ntouch spawned\n");

    let (code, _, stderr) = fx.run(&["run"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("empty runner command"), "stderr:\n{stderr}");
    assert!(!fx.exists("spawned"));
}

// ─── init / --print-config ────────────────────────────────────────────────────

#[test]
fn init_creates_config() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_in(&["init"], dir.path());
    assert_eq!(code, Some(0));

    let content = fs::read_to_string(dir.path().join("roster.toml")).unwrap();
    assert!(content.contains("[roster]"));
    assert!(content.contains("[runner]"));
    assert!(content.contains("[rotate]"));
    toml::from_str::<toml::Value>(&content).expect("generated roster.toml must be valid TOML");
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let fx = Fixture::new("replace");
    let before = fx.read("roster.toml");

    let (code, stdout, stderr) = fx.run(&["init"]);

    assert_ne!(code, Some(0));
    assert_eq!(fx.read("roster.toml"), before);
    assert!(format!("{stdout}{stderr}").contains("already exists"));
}

#[test]
fn print_config_shows_loaded_values() {
    let fx = Fixture::new("replace");
    let (code, stdout, _) = fx.run(&["--print-config"]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains("Replace"));
    assert!(stdout.contains("roster.csv"));
}

#[test]
fn print_config_with_init_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let (code, stdout, _) = run_in(&["--print-config", "init"], dir.path());

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Config"), "stdout:\n{stdout}");
    assert!(!dir.path().join("roster.toml").exists());
}

#[test]
fn config_flag_reads_specified_file() {
    let fx = Fixture::new("archive");
    fx.write(
        "other.toml",
        "[roster]\npath = \"class-b.csv\"\n[rotate]\nmode = \"replace\"\n",
    );
    fx.write("class-b.csv.out", "b");

    let (code, _, stderr) = fx.run(&["--config", "other.toml", "rotate"]);

    assert_eq!(code, Some(0), "stderr:\n{stderr}");
    assert_eq!(fx.read("class-b.csv"), "b");
}

#[test]
fn invalid_config_exits_nonzero() {
    let fx = Fixture::new("archive");
    fx.write("roster.toml", "not valid toml ][[[");

    let (code, _, stderr) = fx.run(&["rotate"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("parsing"), "stderr:\n{stderr}");
}
