//! End-to-end runs of the `starbattle` binary

use insta::assert_snapshot;

use crate::common::{config_file, fixture, run_cli, stderr, stdout};

fn path(name: &str) -> String {
    fixture(name).display().to_string()
}

#[test]
fn show_blank_board_with_placements() {
    let config = config_file("[board]\ndimension = 5\nstars_per_line = 1\n");
    let output = run_cli(&config, &["show", "--star", "1,1", "--dot", "4,4"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_snapshot!(stdout(&output), @r"
    x x x . .
    x * x . .
    x x x . .
    . . . . .
    . . . . x
    stars: 1  dots: 9  blanks: 15
    valid
    ");
}

#[test]
fn show_solution_reports_complete() {
    let config = config_file("");
    let output = run_cli(&config, &["show", &path("easy_1.json"), "--solution"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("stars: 18  dots: 62  blanks: 1"));
    assert!(text.ends_with("complete\n"));
}

#[test]
fn show_lists_violations() {
    let config = config_file("");
    let output = run_cli(
        &config,
        &["show", "--star", "0,0", "--star", "3,0", "--star", "6,0"],
    );

    assert!(output.status.success());
    assert!(stdout(&output).contains("violation: row 0 holds 3 stars (limit 2)"));
}

#[test]
fn check_accepts_easy_1() {
    let config = config_file("");
    let output = run_cli(&config, &["check", &path("easy_1.json")]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "complete\n");
}

#[test]
fn check_fails_on_incomplete_solution() {
    let config = config_file("[board]\ndimension = 2\nstars_per_line = 1\n");
    let output = run_cli(&config, &["check", &path("incomplete_2x2.json")]);

    assert!(!output.status.success());
    assert!(stdout(&output).ends_with("incomplete\n"));
}

#[test]
fn field_is_compact_when_configured() {
    let config = config_file("[board]\ndimension = 1\nstars_per_line = 1\n[export]\npretty = false\n");
    let output = run_cli(&config, &["field"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "{\"dimension\":1,\"samples\":[{\"x\":0,\"y\":0,\"p_star\":1.0}]}\n"
    );
}

#[test]
fn field_reflects_stars() {
    let config = config_file("[board]\ndimension = 3\nstars_per_line = 1\n");
    let output = run_cli(&config, &["field", "--star", "0,0"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let field: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let samples = field["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 9);
    assert_eq!(samples[0]["p_star"], 1.0);
    assert_eq!(samples[1]["p_star"], 0.0);
    assert_eq!(samples[8]["p_star"], 1.0 / 3.0);
}

#[test]
fn bad_coordinate_is_a_usage_error() {
    let config = config_file("");
    let output = run_cli(&config, &["show", "--star", "oops"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("expected X,Y"));
}

#[test]
fn puzzle_errors_name_the_file() {
    let config = config_file("");
    let output = run_cli(&config, &["check", "/nonexistent/puzzle.json"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("loading puzzle /nonexistent/puzzle.json"));
}

#[test]
fn check_lists_touching_solution_stars() {
    let config = config_file("[board]\ndimension = 2\nstars_per_line = 1\n");
    let output = run_cli(&config, &["check", &path("touching_2x2.json")]);

    assert!(!output.status.success());
    assert_snapshot!(stdout(&output), @r"
    violation: row 0 holds 2 stars (limit 1)
    violation: shape 0 holds 2 stars (limit 1)
    violation: stars at (0, 0) and (1, 0) touch
    incomplete
    ");
}
