//! Behavioral specifications for the groom CLI.
//!
//! These tests are black-box: they invoke the binary and verify stdout,
//! stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

use std::fs;

use prelude::*;

#[test]
fn help_exits_successfully() {
    groom_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("groom"));
}

#[test]
fn version_flag_exits_successfully() {
    groom_cmd().arg("--version").assert().success();
}

#[test]
fn version_subcommand_prints_version() {
    groom_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicates::str::contains("groom "));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    groom_cmd().args(["check", "--definitely-not"]).assert().code(1);
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    groom_cmd().arg("polish").assert().code(1);
}

#[test]
fn config_rejects_extra_paths() {
    let tmp = project();
    groom_cmd()
        .args(["config", ".", "extra"])
        .current_dir(tmp.path())
        .assert()
        .code(1);
}

#[test]
fn check_clean_tree_exits_zero() {
    let tmp = project();
    write(tmp.path(), "a.clj", "(ns a)\n");

    groom_cmd()
        .arg("check")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("1 correct"));
}

#[test]
fn check_violation_exits_two_and_prints_a_diff() {
    let tmp = project();
    write(tmp.path(), "b.clj", "(ns b)   \n\n\n");

    groom_cmd()
        .args(["check", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .code(2)
        .stdout(predicates::str::contains("--- a/"))
        .stdout(predicates::str::contains("+++ b/"))
        .stdout(predicates::str::contains("1 incorrect"));
}

#[test]
fn check_never_mutates_files() {
    let tmp = project();
    let original = "(ns b)   \n\n\n";
    write(tmp.path(), "b.clj", original);

    groom_cmd()
        .arg("check")
        .current_dir(tmp.path())
        .assert()
        .code(2);

    assert_eq!(
        fs::read_to_string(tmp.path().join("b.clj")).unwrap(),
        original
    );
}

#[test]
fn no_color_output_has_no_ansi_escapes() {
    let tmp = project();
    write(tmp.path(), "b.clj", "(ns b)   \n");

    let output = groom_cmd()
        .args(["check", "--no-color"])
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert!(!String::from_utf8_lossy(&output.stdout).contains('\u{1b}'));
}

#[test]
fn fix_rewrites_and_exits_zero() {
    let tmp = project();
    write(tmp.path(), "a.clj", "(ns a)\n");
    write(tmp.path(), "b.clj", "(ns b)   \n\n\n");

    groom_cmd()
        .arg("fix")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("reformatted"))
        .stdout(predicates::str::contains("1 fixed"))
        .stdout(predicates::str::contains("corrected 1 file(s)"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("b.clj")).unwrap(),
        "(ns b)\n"
    );
}

#[test]
fn second_fix_run_finds_nothing_to_do() {
    let tmp = project();
    write(tmp.path(), "b.clj", "(ns b)   \n");

    groom_cmd().arg("fix").current_dir(tmp.path()).assert().success();

    groom_cmd()
        .arg("fix")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("1 correct"))
        .stdout(predicates::str::contains("reformatted").not());
}

#[test]
fn nonexistent_root_exits_one_before_any_batch() {
    groom_cmd()
        .args(["check", "no/such/path"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("cannot resolve"));
}

#[test]
fn processing_error_exits_three_without_aborting_siblings() {
    let tmp = project();
    write(tmp.path(), "a.clj", "(ns a)\n");
    fs::write(tmp.path().join("bad.clj"), [0xff, 0xfe, 0x00]).unwrap();

    groom_cmd()
        .arg("check")
        .current_dir(tmp.path())
        .assert()
        .code(3)
        .stdout(predicates::str::contains("not valid UTF-8"))
        .stdout(predicates::str::contains("1 correct"))
        .stdout(predicates::str::contains("1 failed"));
}

#[test]
fn json_output_is_a_single_document() {
    let tmp = project();
    write(tmp.path(), "b.clj", "(ns b)   \n");

    let output = groom_cmd()
        .args(["check", "--output", "json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let doc: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be one JSON document");
    assert_eq!(doc["mode"], "check");
    assert_eq!(doc["counts"]["incorrect"], 1);
}

#[test]
fn verbose_mode_shows_per_file_debug_lines() {
    let tmp = project();
    write(tmp.path(), "a.clj", "(ns a)\n");

    groom_cmd()
        .args(["-v", "check"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("formatted correctly"))
        .stderr(predicates::str::contains("Roots:"));
}

#[test]
fn config_prints_merged_toml() {
    let tmp = project();
    write(tmp.path(), "groom.toml", "[format]\nmax_blank_lines = 3\n");

    groom_cmd()
        .arg("config")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("max_blank_lines = 3"))
        .stdout(predicates::str::contains("[files]"));
}

#[test]
fn multiple_roots_are_aggregated() {
    let first = project();
    let second = project();
    write(first.path(), "a.clj", "(ns a)\n");
    write(second.path(), "b.clj", "(ns b)\n");

    groom_cmd()
        .arg("check")
        .arg(first.path())
        .arg(second.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("2 correct"));
}

#[test]
fn explicit_file_argument_is_checked_even_with_odd_extension() {
    let tmp = project();
    write(tmp.path(), "notes.txt", "hello   \n");

    groom_cmd()
        .arg("check")
        .arg(tmp.path().join("notes.txt"))
        .assert()
        .code(2)
        .stdout(predicates::str::contains("1 incorrect"));
}

#[test]
fn nearest_config_governs_its_subtree() {
    let tmp = project();
    write(tmp.path(), "groom.toml", "[format]\ntrim_trailing = false\n");
    write(tmp.path(), "b.clj", "(ns b)   \n");

    // trailing whitespace is allowed by this tree's config
    groom_cmd()
        .arg("check")
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[test]
fn malformed_config_is_a_usage_error() {
    let tmp = project();
    write(tmp.path(), "groom.toml", "not toml [[[");
    write(tmp.path(), "a.clj", "(ns a)\n");

    groom_cmd()
        .arg("check")
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid config"));
}
