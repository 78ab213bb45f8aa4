use assert_cmd::Command;
use predicates::prelude::*;

fn piecalc() -> Command {
    let mut cmd = Command::cargo_bin("piecalc").unwrap();
    cmd.arg("--color").arg("never");
    cmd
}

#[test]
fn library_mode_prints_the_library_example() {
    piecalc()
        .arg("library")
        .assert()
        .success()
        .stdout(predicate::str::contains("Add Maths = +50 -> 50"))
        .stdout(predicate::str::contains("Final Answer: Total elements in union = 103"));
}

#[test]
fn quiet_library_mode_prints_just_the_answer() {
    let output = piecalc().args(["library", "--quiet"]).unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Add Maths"));
    assert!(stdout.ends_with("Final Answer: Total elements in union = 103\n"));
}

#[test]
fn by_order_prints_subtotals() {
    piecalc()
        .args(["library", "--by-order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: Add sizes of individual sets = +125 -> 125"))
        .stdout(predicate::str::contains("Step 2: Subtract pairwise intersections = -26 -> 99"))
        .stdout(predicate::str::contains("Step 3: Add 3-way intersections = +4 -> 103"));
}

#[test]
fn custom_separator_shows_in_keys() {
    piecalc()
        .args(["library", "--separator", " & "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtract Maths & Science = -12 -> 83"))
        .stdout(predicate::str::contains("= 103"));
}

#[test]
fn menu_exit_choice_ends_the_program() {
    piecalc()
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Dynamic PIE (numbers)"))
        .stdout(predicate::str::ends_with("Exiting...\n"));
}

#[test]
fn empty_input_is_a_clean_exit() {
    piecalc().write_stdin("").assert().success();
}

#[test]
fn real_sets_from_stdin() {
    piecalc()
        .write_stdin("2\n3\nA\n3\n1 2 3\nB\n3\n2 3 4\nC\n2\n4 5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Answer: Total elements in union = 5"));
}

#[test]
fn bad_input_does_not_crash_the_menu() {
    piecalc()
        .write_stdin("two\n1\nx\n3\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: invalid input"))
        .stdout(predicate::str::contains("= 103"));
}

#[test]
fn unknown_mode_is_refused() {
    piecalc().arg("frobnicate").assert().failure();
}
