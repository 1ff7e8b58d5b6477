//! End-to-end tests of the `longest-exec` binary.

use predicates::prelude::*;
use assert_cmd::Command;

const SAMPLE: &str = "\
build -> 1.2s
test -> 500ms
not a measurement line
lint -> 2s
";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("longest-exec").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_mode_prints_ranked_table() {
    cmd()
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(
            "Longest execution sorted by time:\n\
             2s     | lint\n\
             1.2s   | build\n\
             500ms  | test\n",
        );
}

#[test]
fn test_default_mode_trims_labels() {
    cmd()
        .args(["--max-columns", "12"])
        .write_stdin("/usr/bin/clang -O2 -c some/long/file.c -> 3s\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3s  | clang -O2...\n"));
}

#[test]
fn test_max_lines_limits_output() {
    cmd()
        .args(["--max-lines", "2", "-j", "2"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("lint"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("test").not());
}

#[test]
fn test_legacy_flag_spelling() {
    cmd()
        .args(["--maxlines", "1", "--maxcolumns", "40"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("Longest execution sorted by time:\n2s  | lint\n");
}

#[test]
fn test_line_mode_prints_full_entry() {
    cmd()
        .args(["line", "1"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("build\n1.2s\n");
}

#[test]
fn test_line_mode_keeps_label_untrimmed() {
    cmd()
        .args(["line", "0"])
        .write_stdin("a -> b -> 3s\n")
        .assert()
        .success()
        .stdout("a -> b\n3s\n");
}

#[test]
fn test_line_mode_out_of_range() {
    cmd()
        .args(["line", "99"])
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 99 out of bounds"));
}

#[test]
fn test_line_mode_malformed_index() {
    cmd()
        .args(["line", "first"])
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_unknown_subcommand() {
    cmd()
        .arg("frobnicate")
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}

#[test]
fn test_invalid_duration_is_logged_and_skipped() {
    cmd()
        .write_stdin("build -> notaduration\nlint -> 2s\n")
        .assert()
        .success()
        .stdout("Longest execution sorted by time:\n2s  | lint\n")
        .stderr(predicate::str::contains("invalid duration \"notaduration\""));
}

#[test]
fn test_overlong_lines_are_skipped() {
    let input = format!("{} -> 9s\nshort -> 1s\n", "x".repeat(70 * 1024));
    cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("Longest execution sorted by time:\n1s  | short\n");
}

#[test]
fn test_no_measurements_warns() {
    cmd()
        .write_stdin("Compiling foo v0.1.0\n")
        .assert()
        .success()
        .stdout("Longest execution sorted by time:\n")
        .stderr(predicate::str::contains("no `<label> -> <duration>` lines found"));
}

#[test]
fn test_zero_workers_rejected() {
    cmd()
        .args(["--workers", "0"])
        .write_stdin(SAMPLE)
        .assert()
        .failure();
}
