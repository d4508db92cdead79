// tests/cli/smoke_tests.rs
//! Runs the binary against the bundled `users.csv`.

use assert_cmd::Command;
use predicates::prelude::*;

fn user_stats() -> Command {
    Command::new(env!("CARGO_BIN_EXE_user_stats"))
}

#[test]
fn shows_help() {
    user_stats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("user_stats"))
        .stdout(predicate::str::contains("--min-age"));
}

#[test]
fn default_operation_is_summary() {
    user_stats()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Total users: 10\nFiltered count: 6\n"))
        .stdout(predicate::str::contains("Average age: 34.2\n"))
        .stdout(predicate::str::contains("Users per region:").not())
        .stdout(predicate::str::ends_with(
            "Top 3 oldest users:\n  Frank (52)\n  Carla (45)\n  Ines (45)\n",
        ));
}

#[test]
fn summary_json_still_carries_regions() {
    user_stats()
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"regions\""))
        .stdout(predicate::str::contains("\"Oceania\""));
}

#[test]
fn group_lists_countries_in_file_order() {
    user_stats().arg("group").assert().success().stdout(
        "Users per country:\nFinland: 1\nUSA: 1\nBrazil: 1\nIndia: 1\nGermany: 1\n\
         Canada: 1\nAustralia: 1\nJapan: 1\nFrance: 1\nAtlantis: 1\n",
    );
}

#[test]
fn single_line_operations() {
    user_stats().arg("filter").assert().success().stdout("Filtered count: 6\n");
    user_stats().arg("avg").assert().success().stdout("Average age: 34.2\n");
}

#[test]
fn top_with_custom_size() {
    user_stats()
        .args(["top", "--top", "4"])
        .assert()
        .success()
        .stdout("Frank (52)\nCarla (45)\nInes (45)\nGina (38)\n");
}

#[test]
fn unknown_operation_exits_zero() {
    user_stats()
        .arg("median")
        .assert()
        .success()
        .stdout("Unknown operation 'median'. Use summary|filter|group|avg|top|region.\n");
}

#[test]
fn hyphenated_selector_is_reported_as_unknown() {
    user_stats()
        .arg("-x")
        .assert()
        .success()
        .stdout("Unknown operation '-x'. Use summary|filter|group|avg|top|region.\n");
}

#[test]
fn arguments_after_the_operation_are_ignored() {
    user_stats().args(["avg", "extra"]).assert().success().stdout("Average age: 34.2\n");
}

#[test]
fn json_format() {
    user_stats()
        .args(["avg", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\": \"avg\""))
        .stdout(predicate::str::contains("\"average_age\": 34.2"));
}

#[test]
fn rejects_unknown_format() {
    user_stats().args(["--format", "xml"]).assert().failure();
}
