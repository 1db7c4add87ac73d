use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

fn run_in(ws: &TempWorkspace, args: &[&str]) -> assert_cmd::assert::Assert {
    Command::new(env!("CARGO_BIN_EXE_line_sorter"))
        .current_dir(ws.path())
        .args(args)
        .assert()
        .success()
}

#[test]
fn integer_line_goes_to_integers_file() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "42\n");

    run_in(&ws, &["in.txt"]).stdout(predicate::str::contains("integers.txt"));

    assert_eq!(ws.read("integers.txt").as_deref(), Some("42\n"));
    assert!(!ws.exists("floats.txt"));
    assert!(!ws.exists("strings.txt"));
}

#[test]
fn float_line_goes_to_floats_file() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "3.14\n");
    run_in(&ws, &["in.txt"]);
    assert_eq!(ws.read("floats.txt").as_deref(), Some("3.14\n"));
}

#[test]
fn text_line_goes_to_strings_file() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "hello\n");
    run_in(&ws, &["in.txt"]);
    assert_eq!(ws.read("strings.txt").as_deref(), Some("hello\n"));
}

#[test]
fn trailing_dot_is_a_string() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "5.\n");
    run_in(&ws, &["in.txt"]);
    assert_eq!(ws.read("strings.txt").as_deref(), Some("5.\n"));
    assert!(!ws.exists("floats.txt"));
}

#[test]
fn blank_lines_are_dropped_and_lines_trimmed() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "\n   \n  7  \r\n\t\nword\n");
    run_in(&ws, &["-s", "in.txt"]).stdout(predicate::str::contains(
        "Integers: 1, Floats: 0, Strings: 1",
    ));
    assert_eq!(ws.read("integers.txt").as_deref(), Some("7\n"));
    assert_eq!(ws.read("strings.txt").as_deref(), Some("word\n"));
}

#[test]
fn inputs_are_merged_in_argument_order() {
    let ws = TempWorkspace::new();
    ws.create_file("a.txt", "1\nx\n");
    ws.create_file("b.txt", "2\ny\n1.5e10\n");
    run_in(&ws, &["b.txt", "a.txt"]);
    assert_eq!(ws.read("integers.txt").as_deref(), Some("2\n1\n"));
    assert_eq!(ws.read("strings.txt").as_deref(), Some("y\nx\n"));
    assert_eq!(ws.read("floats.txt").as_deref(), Some("1.5e10\n"));
}

#[test]
fn prefix_and_output_dir_shape_file_names() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n");
    std::fs::create_dir(ws.path().join("out")).unwrap();

    run_in(&ws, &["-o", "out", "-p", "result_", "in.txt"])
        .stdout(predicate::str::contains("result_integers.txt"));
    assert_eq!(ws.read("out/result_integers.txt").as_deref(), Some("1\n"));
}

#[test]
fn append_mode_accumulates_runs() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n");
    run_in(&ws, &["in.txt"]);
    run_in(&ws, &["-a", "in.txt"]);
    assert_eq!(ws.read("integers.txt").as_deref(), Some("1\n1\n"));

    run_in(&ws, &["in.txt"]);
    assert_eq!(ws.read("integers.txt").as_deref(), Some("1\n"));
}
