use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

fn line_sorter(ws: &TempWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_line_sorter"));
    cmd.current_dir(ws.path());
    cmd
}

#[test]
fn short_stats_report_counts() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n2\n3\n");

    line_sorter(&ws)
        .args(["-s", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integers: 3, Floats: 0, Strings: 0"))
        .stdout(predicate::str::contains("Average").not());
}

#[test]
fn full_stats_include_previews_and_aggregates() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n2\n3\n");

    line_sorter(&ws)
        .args(["-f", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integers: 3, Floats: 0, Strings: 0"))
        .stdout(predicate::str::contains("Integers: [1, 2, 3]"))
        .stdout(predicate::str::contains("Average: 2.00000"))
        .stdout(predicate::str::contains("Float statistics").not());
}

#[test]
fn no_stats_without_flags() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n");

    line_sorter(&ws)
        .arg("in.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("statistics").not());
}

#[test]
fn big_integer_sums_are_exact() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "99999999999999999999\n1\n");

    line_sorter(&ws)
        .args(["-f", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum: 100000000000000000000\n"))
        .stdout(predicate::str::contains("Average: 50000000000000000000.00000"));
}

#[test]
fn mixed_input_full_report() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "abc\n1.5\n-2\n.5\nlonger text\n");

    line_sorter(&ws)
        .args(["-f", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Floats: [1.5, .5]"))
        .stdout(predicate::str::contains("Sum: 2.00000"))
        .stdout(predicate::str::contains("Average: 1.00000"))
        .stdout(predicate::str::contains("Min length: 3\nMax length: 11"));
}
